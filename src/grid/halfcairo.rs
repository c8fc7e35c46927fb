//! The half-Cairo grid (polyhalfcairos: alternating triangle and kite
//! tiles). Grounded on `original_source/src/halfcairogrid.h`: tile type
//! dispatched by `(p mod 3)` in both axes into an 8-entry type table (4
//! triangle orientations, 4 kite orientations, CCW from East); triangle
//! tiles have 10 vertex-neighbors / 3 edge-neighbors, kite tiles have 12 / 4;
//! 8 orientations (D4); translatable iff both cells share a tile type.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Halfcairo;

/// `None` iff `p` is a half-cairo hub cell (the `(p mod 3) == (0, 0)` slot,
/// marked `8` in `TYPES`), not one of the 8 tile types.
fn tile_type_index(p: Point) -> Option<usize> {
    const TYPES: [usize; 9] = [8, 0, 4, 2, 1, 3, 6, 7, 5];
    let xm = p.x.rem_euclid(3);
    let ym = p.y.rem_euclid(3);
    let idx = TYPES[(ym * 3 + xm) as usize];
    (idx < 8).then_some(idx)
}

/// Invariant-backed lookup for call sites that only ever see cells already
/// validated by [`Grid::is_valid_cell`] at the input boundary (§7).
fn tile_type_index_checked(p: Point) -> usize {
    tile_type_index(p)
        .expect("half-cairo neighbor lookup called on a hub cell; validate with is_valid_cell first")
}

fn is_triangle(idx: usize) -> bool {
    idx % 2 == 0
}

const NEIGHBOUR_VECTORS: [[Point; 12]; 8] = [
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-2, 1),
        Point::new(-2, 0),
        Point::new(-2, -1),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(1, -1),
        Point::new(0, 0),
        Point::new(0, 0),
    ],
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-2, 0),
        Point::new(-2, -1),
        Point::new(-2, -2),
        Point::new(-1, -2),
        Point::new(0, -2),
        Point::new(0, -1),
        Point::new(1, -1),
    ],
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(-1, -2),
        Point::new(0, -2),
        Point::new(1, -2),
        Point::new(1, -1),
        Point::new(0, 0),
        Point::new(0, 0),
    ],
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(0, -2),
        Point::new(1, -2),
        Point::new(2, -2),
        Point::new(2, -1),
        Point::new(2, 0),
    ],
    [
        Point::new(2, 0),
        Point::new(2, 1),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(1, -1),
        Point::new(2, -1),
        Point::new(0, 0),
        Point::new(0, 0),
    ],
    [
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(2, 1),
        Point::new(2, 2),
        Point::new(1, 2),
        Point::new(0, 2),
        Point::new(0, 1),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(1, -1),
    ],
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(1, 2),
        Point::new(0, 2),
        Point::new(-1, 2),
        Point::new(-1, 1),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(1, -1),
        Point::new(0, 0),
        Point::new(0, 0),
    ],
    [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
        Point::new(0, 2),
        Point::new(-1, 2),
        Point::new(-2, 2),
        Point::new(-2, 1),
        Point::new(-2, 0),
        Point::new(-1, 0),
        Point::new(-1, -1),
        Point::new(0, -1),
        Point::new(1, -1),
    ],
];

const EDGE_NEIGHBOUR_VECTORS: [[Point; 4]; 8] = [
    [Point::new(1, 0), Point::new(0, 1), Point::new(0, -1), Point::new(0, 0)],
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)],
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, 0)],
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)],
    [Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1), Point::new(0, 0)],
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)],
    [Point::new(1, 0), Point::new(-1, 0), Point::new(0, -1), Point::new(0, 0)],
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)],
];

const ORIENTATIONS: [Transform; 8] = [
    Transform::new(1, 0, 0, 0, 1, 0),
    Transform::new(0, -1, 0, 1, 0, 0),
    Transform::new(-1, 0, 0, 0, -1, 0),
    Transform::new(0, 1, 0, -1, 0, 0),
    Transform::new(-1, 0, 0, 0, 1, 0),
    Transform::new(0, -1, 0, -1, 0, 0),
    Transform::new(1, 0, 0, 0, -1, 0),
    Transform::new(0, 1, 0, 1, 0, 0),
];

const ORIGINS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
];

impl Grid for Halfcairo {
    const CODE: char = 'h';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn num_neighbors(p: Point) -> usize {
        if is_triangle(tile_type_index_checked(p)) { 10 } else { 12 }
    }

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        let idx = tile_type_index_checked(p);
        let n = Self::num_neighbors(p);
        &NEIGHBOUR_VECTORS[idx][..n]
    }

    fn num_edge_neighbors(p: Point) -> usize {
        if is_triangle(tile_type_index_checked(p)) { 3 } else { 4 }
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        let idx = tile_type_index_checked(p);
        let n = Self::num_edge_neighbors(p);
        &EDGE_NEIGHBOUR_VECTORS[idx][..n]
    }

    fn translatable(p: Point, q: Point) -> bool {
        tile_type_index(p) == tile_type_index(q)
    }

    fn is_valid_cell(p: Point) -> bool {
        tile_type_index(p).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_all_valid_tiles() {
        for &o in ORIGINS.iter() {
            assert!(Halfcairo::is_valid_cell(o));
        }
    }

    #[test]
    fn hub_cell_is_invalid() {
        // (0, 0) mod 3 is the hub slot (TYPES[0] == 8).
        assert!(!Halfcairo::is_valid_cell(Point::new(0, 0)));
    }
}
