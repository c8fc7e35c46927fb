//! The half-square-triangle grid (polyabolos). Grounded on
//! `original_source/src/abologrid.h`: four triangle orientations dispatched
//! by a 2x2 parity lookup (mirroring `getTileType`'s own derivation), 14
//! vertex-neighbors, 3 edge-neighbors, 8 orientations (D4 acting on the
//! underlying square lattice the triangles halve); translatable iff both
//! cells share a tile type.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Abolo;

fn tile_type_index(p: Point) -> usize {
    let mut x = p.x;
    let y = p.y;
    if (y.div_euclid(2)).rem_euclid(2) == 0 {
        x -= 2;
    }
    let xm = x.rem_euclid(2);
    let ym = y.rem_euclid(2);
    ORIGINS.iter().position(|&o| o == Point::new(xm, ym)).expect("abolo tile type lookup is total")
}

const ALL_NEIGHBOURS: [[Point; 14]; 4] = [
    [
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(-1, -1),
        Point::new(2, -1),
        Point::new(2, -2),
        Point::new(1, -3),
        Point::new(0, -3),
        Point::new(-1, -2),
        Point::new(-2, -1),
        Point::new(-3, 0),
        Point::new(-3, 1),
        Point::new(-2, 2),
        Point::new(-1, 2),
        Point::new(1, 1),
    ],
    [
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(1, -1),
        Point::new(1, 2),
        Point::new(2, 2),
        Point::new(3, 1),
        Point::new(3, 0),
        Point::new(2, -1),
        Point::new(1, -2),
        Point::new(0, -3),
        Point::new(-1, -3),
        Point::new(-2, -2),
        Point::new(-2, -1),
        Point::new(-1, 1),
    ],
    [
        Point::new(-1, 0),
        Point::new(0, -1),
        Point::new(1, 1),
        Point::new(-2, 1),
        Point::new(-2, 2),
        Point::new(-1, 3),
        Point::new(0, 3),
        Point::new(1, 2),
        Point::new(2, 1),
        Point::new(3, 0),
        Point::new(3, -1),
        Point::new(2, -2),
        Point::new(1, -2),
        Point::new(-1, -1),
    ],
    [
        Point::new(1, 0),
        Point::new(0, -1),
        Point::new(-1, 1),
        Point::new(-1, -2),
        Point::new(-2, -2),
        Point::new(-3, -1),
        Point::new(-3, 0),
        Point::new(-2, 1),
        Point::new(-1, 2),
        Point::new(0, 3),
        Point::new(1, 3),
        Point::new(2, 2),
        Point::new(2, 1),
        Point::new(1, -1),
    ],
];

const EDGE_NEIGHBOURS: [[Point; 3]; 4] = [
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, -1)],
    [Point::new(-1, 0), Point::new(0, 1), Point::new(1, -1)],
    [Point::new(-1, 0), Point::new(0, -1), Point::new(1, 1)],
    [Point::new(1, 0), Point::new(0, -1), Point::new(-1, 1)],
];

const ORIGINS: [Point; 4] = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)];

const ORIENTATIONS: [Transform; 8] = [
    Transform::new(1, 0, 0, 0, 1, 0),
    Transform::new(0, -1, 1, 1, 0, 0),
    Transform::new(-1, 0, 1, 0, -1, 1),
    Transform::new(0, 1, 0, -1, 0, 1),
    Transform::new(-1, 0, 1, 0, 1, 0),
    Transform::new(0, -1, 1, -1, 0, 1),
    Transform::new(1, 0, 0, 0, -1, 1),
    Transform::new(0, 1, 0, 1, 0, 0),
];

impl Grid for Abolo {
    const CODE: char = 'A';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        &ALL_NEIGHBOURS[tile_type_index(p)]
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        &EDGE_NEIGHBOURS[tile_type_index(p)]
    }

    fn translatable(p: Point, q: Point) -> bool {
        tile_type_index(p) == tile_type_index(q)
    }

    // `tile_type_index`'s lookup is total: the parity adjustment leaves `xm`
    // unchanged mod 2, so `(xm, ym)` always lands on one of the 4 `ORIGINS`
    // entries, which already exhaust `{0,1} x {0,1}`. Unlike drafter/kite/
    // half-cairo there is no off-lattice abolo residue to reject.
    fn is_valid_cell(_p: Point) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_integer_point_is_a_valid_abolo_cell() {
        for x in -5..=5 {
            for y in -5..=5 {
                assert!(Abolo::is_valid_cell(Point::new(x, y)));
            }
        }
    }
}
