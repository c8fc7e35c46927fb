//! Cloud: the set of transforms relating a shape to a copy of itself (spec
//! §4.4). Grounded on `original_source/cloud.h`.

use std::collections::HashSet;

use crate::{
    geom::Transform,
    grid::Grid,
    shape::Shape,
};

/// One oriented copy of the central shape: a symmetry `T` applied to the
/// shape, its halo, and its border, computed once up front so every
/// adjacency/overlap check below just translates these static copies.
struct Orientation<G> {
    t: Transform,
    border: Shape<G>,
}

/// Classifies every transform that can place a second copy of a shape
/// relative to a fixed central copy into exactly one of: overlapping (some
/// cell is shared), cleanly adjacent (touches but stays simply connected),
/// or hole-adjacent (touches but encloses a hole). [`Cloud::surroundable`]
/// is false iff some halo cell of the central shape has no legal adjacency
/// at all, in which case no Heesch number is achievable and the solver can
/// short-circuit.
pub struct Cloud<G> {
    shape: Shape<G>,
    halo: Vec<crate::geom::Point>,
    border: Vec<crate::geom::Point>,
    orientations: Vec<Orientation<G>>,
    adjacent: HashSet<Transform>,
    adjacent_hole: HashSet<Transform>,
    overlapping: HashSet<Transform>,
    surroundable: bool,
}

impl<G: Grid> Cloud<G> {
    pub fn new(shape: Shape<G>) -> Self {
        Self::new_filtered(shape, |_| true)
    }

    /// Builds a cloud restricted to the subset of `G::ORIENTATIONS` for which
    /// `keep` returns true, mirroring `heesch.h`'s constructor-time
    /// `Orientations` restriction (`ALL`/`TRANSLATIONS_ONLY`/
    /// `TRANSLATIONS_ROTATIONS`, spec §6.2's `-translations`/`-rotations`
    /// flags): the restriction narrows which symmetries the cloud itself
    /// ever considers, not a post-hoc filter over a fully built cloud.
    pub fn new_filtered(shape: Shape<G>, keep: impl Fn(&crate::geom::Transform) -> bool) -> Self {
        let (halo, border) = shape.get_halo_and_border();

        let mut cloud = Cloud {
            shape,
            halo,
            border,
            orientations: Vec::new(),
            adjacent: HashSet::new(),
            adjacent_hole: HashSet::new(),
            overlapping: HashSet::new(),
            surroundable: true,
        };
        cloud.calc_orientations(keep);
        cloud.calc_transforms();
        cloud
    }

    pub fn is_overlap(&self, t: &Transform) -> bool {
        self.overlapping.contains(t)
    }

    pub fn is_adjacent(&self, t: &Transform) -> bool {
        self.adjacent.contains(t)
    }

    pub fn is_hole_adjacent(&self, t: &Transform) -> bool {
        self.adjacent_hole.contains(t)
    }

    pub fn is_any_adjacent(&self, t: &Transform) -> bool {
        self.is_adjacent(t) || self.is_hole_adjacent(t)
    }

    pub fn is_any(&self, t: &Transform) -> bool {
        self.is_overlap(t) || self.is_any_adjacent(t)
    }

    pub fn adjacent(&self) -> impl Iterator<Item = &Transform> {
        self.adjacent.iter()
    }

    pub fn hole_adjacent(&self) -> impl Iterator<Item = &Transform> {
        self.adjacent_hole.iter()
    }

    pub fn overlapping(&self) -> impl Iterator<Item = &Transform> {
        self.overlapping.iter()
    }

    pub fn surroundable(&self) -> bool {
        self.surroundable
    }

    /// The halo of the central shape, in the shape's own coordinate frame.
    pub fn halo(&self) -> &[crate::geom::Point] {
        &self.halo
    }

    /// Builds one `Orientation` per element of `G::ORIENTATIONS`. Distinct
    /// symmetric placements of the shape are deliberately NOT factored out
    /// here: higher coronas can reach the same cell set via two different
    /// composed transforms, and collapsing them would make those placements
    /// fail to recognize each other downstream.
    fn calc_orientations(&mut self, keep: impl Fn(&Transform) -> bool) {
        for &t in G::ORIENTATIONS.iter().filter(|t| keep(t)) {
            let mut oborder = Shape::new();
            for &p in &self.border {
                oborder.add(t * p);
            }
            oborder.complete();
            self.orientations.push(Orientation { t, border: oborder });
        }
    }

    fn calc_transforms(&mut self) {
        // Overlaps: a border cell of the transformed copy lands on a border
        // cell of the central copy. Checking border-against-border instead
        // of a full intersection test is cheaper and sufficient, since any
        // overlap must cover at least one border cell of each copy.
        for &bp in &self.border {
            for ori in &self.orientations {
                for &obp in ori.border.cells() {
                    if G::translatable(obp, bp) {
                        let t_new = ori.t.translate(bp - obp);
                        if !t_new.is_identity() {
                            self.overlapping.insert(t_new);
                        }
                    }
                }
            }
        }

        // Adjacencies: translate a border cell of an oriented copy onto a
        // halo cell of the central shape.
        let halo = self.halo.clone();
        for hp in halo {
            let mut found = false;

            for ori in &self.orientations {
                for &tbp in ori.border.cells() {
                    if !G::translatable(hp, tbp) {
                        continue;
                    }

                    let t_new = ori.t.translate(hp - tbp);

                    if self.is_overlap(&t_new) {
                        continue;
                    }
                    if self.is_adjacent(&t_new) {
                        found = true;
                        continue;
                    }
                    if self.is_hole_adjacent(&t_new) {
                        continue;
                    }

                    // Every overlap has been ruled out, so this placement
                    // is adjacent; whether it's simply connected decides
                    // which bucket it lands in.
                    let mut combined = Shape::new();
                    combined.reset(&self.shape, t_new);
                    for &p in self.shape.cells() {
                        combined.add(p);
                    }
                    combined.complete();

                    if combined.simply_connected() {
                        found = true;
                        self.adjacent.insert(t_new);
                        self.adjacent.insert(t_new.invert());
                    } else {
                        self.adjacent_hole.insert(t_new);
                        self.adjacent_hole.insert(t_new.invert());
                    }
                }
            }

            if !found {
                self.surroundable = false;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geom::Point, grid::omino::Omino};

    fn shape_of(cells: &[(i32, i32)]) -> Shape<Omino> {
        let mut s = Shape::new();
        for &(x, y) in cells {
            s.add(Point::new(x, y));
        }
        s.complete();
        s
    }

    #[test]
    fn single_cell_is_surroundable() {
        let cloud = Cloud::new(shape_of(&[(0, 0)]));
        assert!(cloud.surroundable());
    }

    #[test]
    fn single_cell_has_no_overlaps_among_direct_adjacencies() {
        let cloud = Cloud::new(shape_of(&[(0, 0)]));
        for t in cloud.adjacent() {
            assert!(!cloud.is_overlap(t));
        }
    }

    #[test]
    fn adjacency_set_is_closed_under_inversion() {
        let cloud = Cloud::new(shape_of(&[(0, 0), (1, 0)]));
        for t in cloud.adjacent() {
            assert!(cloud.is_adjacent(&t.invert()));
        }
    }

    #[test]
    fn overlapping_and_adjacent_are_disjoint() {
        let cloud = Cloud::new(shape_of(&[(0, 0), (1, 0), (0, 1)]));
        for t in cloud.adjacent() {
            assert!(!cloud.is_overlap(t));
        }
        for t in cloud.hole_adjacent() {
            assert!(!cloud.is_overlap(t));
        }
    }
}
