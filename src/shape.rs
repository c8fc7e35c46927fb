//! Shape: an ordered set of grid cells (spec §4.3). Grounded on
//! `original_source/src/shape.h`.

use std::{collections::HashMap, marker::PhantomData};

use crate::{
    geom::{Point, Transform},
    grid::{EdgeNeighbours, Grid, Neighbours},
};

/// A finite edge-connected union of cells of grid family `G`. Cells are
/// unsorted while being built via [`add`][`Self::add`]; all other queries
/// require [`complete`][`Self::complete`] to have been called first.
#[derive(Clone, Debug)]
pub struct Shape<G> {
    cells: Vec<Point>,
    complete: bool,
    _marker: PhantomData<G>,
}

impl<G: Grid> Default for Shape<G> {
    fn default() -> Self {
        Shape { cells: Vec::new(), complete: false, _marker: PhantomData }
    }
}

impl<G: Grid> Shape<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, p: Point) {
        self.cells.push(p);
        self.complete = false;
    }

    /// Sorts cells lex-ascending; all subsequent queries assume this order.
    pub fn complete(&mut self) {
        self.cells.sort_unstable();
        self.cells.dedup();
        self.complete = true;
    }

    pub fn cells(&self) -> &[Point] {
        debug_assert!(self.complete, "Shape used before complete()");
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replaces contents with `{T*p : p in other}`, then completes.
    pub fn reset(&mut self, other: &Shape<G>, t: Transform) {
        self.cells.clear();
        self.cells.extend(other.cells().iter().map(|&p| t * p));
        self.complete();
    }

    /// Linear merge over sorted lists; true on first common point.
    pub fn intersects(&self, other: &Shape<G>) -> bool {
        debug_assert!(self.complete && other.complete);
        let (mut i, mut j) = (0, 0);
        let (a, b) = (self.cells(), other.cells());
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }

    /// True iff `|this| == |other|`, the first cells lie in the same
    /// translational class, and `this[i] - other[i]` is constant.
    pub fn equivalent(&self, other: &Shape<G>) -> bool {
        debug_assert!(self.complete && other.complete);
        if self.cells.len() != other.cells.len() || self.cells.is_empty() {
            return self.cells.len() == other.cells.len();
        }
        if !G::translatable(self.cells[0], other.cells[0]) {
            return false;
        }
        let delta = self.cells[0] - other.cells[0];
        self.cells.iter().zip(other.cells.iter()).all(|(&a, &b)| a - b == delta)
    }

    pub fn compare(&self, other: &Shape<G>) -> std::cmp::Ordering {
        self.cells.cmp(&other.cells)
    }

    /// Shifts the minimum cell to its translational-class origin.
    pub fn untranslate(&mut self) {
        debug_assert!(self.complete);
        let Some(&min) = self.cells.first() else { return };
        let Some(&origin) =
            G::ORIGINS.iter().find(|&&o| G::translatable(min, o)).or(G::ORIGINS.first())
        else {
            return;
        };
        let delta = origin - min;
        for c in &mut self.cells {
            *c = *c + delta;
        }
        self.complete();
    }

    /// Computes the vertex halo and border of this shape using the
    /// multiplicity-counting rule of spec §4.3: each cell increments a
    /// counter at itself and at each vertex-neighbor; a shape cell is a
    /// border cell iff its final counter is less than `num_neighbors(p)+1`,
    /// and any counted point outside the shape is a halo cell.
    pub fn get_halo_and_border(&self) -> (Vec<Point>, Vec<Point>) {
        debug_assert!(self.complete);
        let in_shape: std::collections::HashSet<Point> = self.cells.iter().copied().collect();
        let mut counts: HashMap<Point, usize> = HashMap::new();
        for &p in &self.cells {
            *counts.entry(p).or_insert(0) += 1;
            for n in Neighbours::<G>::new(p) {
                *counts.entry(n).or_insert(0) += 1;
            }
        }

        let mut halo = Vec::new();
        let mut border = Vec::new();
        for (&p, &count) in &counts {
            if in_shape.contains(&p) {
                if count < G::num_neighbors(p) + 1 {
                    border.push(p);
                }
            } else {
                halo.push(p);
            }
        }
        halo.sort_unstable();
        border.sort_unstable();
        (halo, border)
    }

    /// Union of edge-neighbors of every cell, minus the shape itself.
    pub fn get_edge_halo(&self) -> Vec<Point> {
        debug_assert!(self.complete);
        let in_shape: std::collections::HashSet<Point> = self.cells.iter().copied().collect();
        let mut halo: std::collections::HashSet<Point> = std::collections::HashSet::new();
        for &p in &self.cells {
            for n in EdgeNeighbours::<G>::new(p) {
                if !in_shape.contains(&n) {
                    halo.insert(n);
                }
            }
        }
        halo.into_iter().collect()
    }

    /// True iff the halo is a single edge-connected component: one
    /// edge-neighbor flood from any halo cell reaches the whole halo.
    /// A halo cell's own edge-neighbor table is always used, so mixed-type
    /// grids are handled correctly even when halo cells have different tile
    /// types.
    pub fn simply_connected(&self) -> bool {
        debug_assert!(self.complete);
        let (halo, _border) = self.get_halo_and_border();
        if halo.is_empty() {
            return true;
        }
        let halo_set: std::collections::HashSet<Point> = halo.iter().copied().collect();

        let mut visited = std::collections::HashSet::new();
        let mut stack = vec![halo[0]];
        while let Some(p) = stack.pop() {
            if !visited.insert(p) {
                continue;
            }
            for n in EdgeNeighbours::<G>::new(p) {
                if halo_set.contains(&n) && !visited.contains(&n) {
                    stack.push(n);
                }
            }
        }
        visited.len() == halo_set.len()
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;

    use super::*;
    use crate::grid::omino::Omino;

    fn square(cells: &[(i32, i32)]) -> Shape<Omino> {
        let mut s = Shape::new();
        for &(x, y) in cells {
            s.add(Point::new(x, y));
        }
        s.complete();
        s
    }

    #[test]
    fn single_cell_has_eight_halo_cells() {
        let s = square(&[(0, 0)]);
        let (halo, border) = s.get_halo_and_border();
        assert_len_eq_x!(halo, 8);
        assert_len_eq_x!(border, 1);
    }

    #[test]
    fn single_cell_is_simply_connected() {
        assert!(square(&[(0, 0)]).simply_connected());
    }

    #[test]
    fn straight_triomino_is_simply_connected() {
        assert!(square(&[(0, 0), (1, 0), (2, 0)]).simply_connected());
    }

    #[test]
    fn disconnected_two_cells_is_not_simply_connected() {
        // Two cells far enough apart that their halos don't touch split the
        // halo into (at least) two components, one of which never reaches
        // the unbounded exterior owner used by HoleFinder; from Shape's own
        // point of view this still reads as "more than one halo component".
        let s = square(&[(0, 0), (5, 5)]);
        assert!(!s.simply_connected());
    }

    #[test]
    fn get_halo_and_border_is_idempotent() {
        let s = square(&[(0, 0), (1, 0), (0, 1)]);
        let (h1, b1) = s.get_halo_and_border();
        let (h2, b2) = s.get_halo_and_border();
        assert_eq!(h1, h2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn reset_then_inverse_reset_recovers_original() {
        let original = square(&[(0, 0), (1, 0), (2, 0), (0, 1)]);
        let t = Transform::new(0, -1, 3, 1, 0, -2);
        let mut moved = Shape::new();
        moved.reset(&original, t);

        let mut recovered = Shape::new();
        recovered.reset(&moved, t.invert());

        assert_eq!(recovered.cells(), original.cells());
    }
}
