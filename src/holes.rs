//! HoleFinder: flood-fills the halo of a set of placed tiles to find
//! enclosed holes (spec §4.5). Grounded on `original_source/holes.h`.

use std::collections::{HashMap, HashSet};

use crate::{
    geom::{Point, Transform},
    grid::{EdgeNeighbours, Grid, Neighbours},
    shape::Shape,
};

/// Opaque handle to a placed tile copy, used only to report which placements
/// border a hole; the solver assigns these when it adds copies.
pub type TileIndex = usize;

/// Incrementally accumulates placed copies of a shape (each stamped down by
/// a [`Transform`]) and, on demand, finds the connected components of their
/// combined halo that never touch the unbounded exterior — those components
/// are holes, and each is reported together with the set of tile copies
/// bordering it.
pub struct HoleFinder<'a, G> {
    shape: &'a Shape<G>,
    cells: HashMap<Point, TileIndex>,
    halo: HashSet<Point>,
    halo_min: Option<Point>,
}

impl<'a, G: Grid> HoleFinder<'a, G> {
    pub fn new(shape: &'a Shape<G>) -> Self {
        HoleFinder { shape, cells: HashMap::new(), halo: HashSet::new(), halo_min: None }
    }

    pub fn add_copy(&mut self, idx: TileIndex, t: Transform) {
        for &p in self.shape.cells() {
            self.cells.insert(t * p, idx);
        }
    }

    fn compute_halo(&mut self) {
        self.halo.clear();
        self.halo_min = None;

        let points: Vec<Point> = self.cells.keys().copied().collect();
        for p in points {
            for pn in Neighbours::<G>::new(p) {
                if !self.cells.contains_key(&pn) {
                    self.halo.insert(pn);
                    self.halo_min = Some(match self.halo_min {
                        Some(min) if min <= pn => min,
                        _ => pn,
                    });
                }
            }
        }
    }

    /// Floods one halo connected-component from `cell` via edge-neighbors,
    /// collecting the placed tiles bordering it. Returns `true` iff the
    /// component never reached `halo_min` (which by construction lies on
    /// the unbounded exterior) — i.e. iff it's an enclosed hole.
    fn search(&self, cell: Point, visited: &mut HashSet<Point>, owners: &mut HashSet<TileIndex>) -> bool {
        let mut was_outer = false;
        let mut working = vec![cell];

        while let Some(p) = working.pop() {
            if !visited.insert(p) {
                continue;
            }

            if Some(p) == self.halo_min {
                was_outer = true;
            }

            for pn in EdgeNeighbours::<G>::new(p) {
                if self.halo.contains(&pn) {
                    working.push(pn);
                }
            }

            for pn in Neighbours::<G>::new(p) {
                if let Some(&idx) = self.cells.get(&pn) {
                    owners.insert(idx);
                }
            }
        }

        !was_outer
    }

    /// Returns one `Vec<TileIndex>` of bordering tile copies per hole found.
    pub fn get_holes(&mut self) -> Vec<Vec<TileIndex>> {
        self.compute_halo();

        let mut holes = Vec::new();
        let mut visited = HashSet::new();

        let halo: Vec<Point> = self.halo.iter().copied().collect();
        for p in halo {
            if visited.contains(&p) {
                continue;
            }
            let mut owners = HashSet::new();
            if self.search(p, &mut visited, &mut owners) {
                let mut owners: Vec<TileIndex> = owners.into_iter().collect();
                owners.sort_unstable();
                holes.push(owners);
            }
        }

        holes
    }

    pub fn has_holes(&mut self) -> bool {
        !self.get_holes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::omino::Omino;

    fn single_cell_shape() -> Shape<Omino> {
        let mut s = Shape::new();
        s.add(Point::new(0, 0));
        s.complete();
        s
    }

    #[test]
    fn single_tile_has_no_holes() {
        let shape = single_cell_shape();
        let mut finder = HoleFinder::new(&shape);
        finder.add_copy(0, Transform::IDENTITY);
        assert!(!finder.has_holes());
    }

    #[test]
    fn ring_of_eight_encloses_one_hole() {
        let shape = single_cell_shape();
        let mut finder = HoleFinder::new(&shape);
        let ring = [
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
        ];
        for (idx, &(x, y)) in ring.iter().enumerate() {
            finder.add_copy(idx + 1, Transform::IDENTITY.translate(Point::new(x, y)));
        }

        let holes = finder.get_holes();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].len(), 8);
    }

    #[test]
    fn broken_ring_has_no_holes() {
        let shape = single_cell_shape();
        let mut finder = HoleFinder::new(&shape);
        let ring = [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];
        for (idx, &(x, y)) in ring.iter().enumerate() {
            finder.add_copy(idx + 1, Transform::IDENTITY.translate(Point::new(x, y)));
        }

        assert!(!finder.has_holes());
    }
}
