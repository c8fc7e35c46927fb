//! The drafter grid (polydrafters: right-triangle tiles from the DAC
//! "drafter's triangle", a 30-60-90 triangle). Transcribed verbatim from
//! `original_source/src/draftergrid.h`'s `all_neighbours`/`edge_neighbours`/
//! `origins`/`orientations` tables: 12 triangle orientations dispatched by
//! `p mod 7` in both coordinates, each with 16 vertex-neighbors and 3
//! edge-neighbors.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Drafter;

/// `None` iff `(x mod 7, y mod 7)` isn't one of the 12 drafter tile origins
/// (only 12 of the 49 residue pairs are actual drafter cells — the rest are
/// off-lattice, e.g. `D 0 0`).
fn tile_type(p: Point) -> Option<usize> {
    let mx = p.x.rem_euclid(7);
    let my = p.y.rem_euclid(7);
    ORIGINS.iter().position(|o| o.x == mx && o.y == my)
}

/// Invariant-backed lookup for call sites that only ever see cells already
/// validated by [`Grid::is_valid_cell`] at the input boundary (§7).
fn tile_type_checked(p: Point) -> usize {
    tile_type(p).expect("drafter neighbor lookup called on an off-lattice cell; validate with is_valid_cell first")
}

const ALL_NEIGHBOURS: [[Point; 16]; 12] = [
    [
        Point::new(2, 0), Point::new(-1, 1), Point::new(1, -2), Point::new(-3, 2),
        Point::new(-4, 2), Point::new(-5, 1), Point::new(-5, 0), Point::new(-4, -2),
        Point::new(-3, -3), Point::new(-1, -4), Point::new(0, -4), Point::new(1, -3),
        Point::new(2, 1), Point::new(0, 3), Point::new(-1, 3), Point::new(3, -2),
    ],
    [
        Point::new(1, -1), Point::new(0, 2), Point::new(-2, 1), Point::new(-3, 1),
        Point::new(-4, 0), Point::new(-4, -1), Point::new(-3, -3), Point::new(-2, -4),
        Point::new(0, -5), Point::new(1, -5), Point::new(2, -4), Point::new(2, -3),
        Point::new(1, 2), Point::new(3, 0), Point::new(3, -1), Point::new(-2, 3),
    ],
    [
        Point::new(2, -1), Point::new(0, 2), Point::new(-1, 0), Point::new(-2, -1),
        Point::new(-2, -2), Point::new(-1, -4), Point::new(0, -5), Point::new(2, -6),
        Point::new(3, -6), Point::new(4, -5), Point::new(4, -4), Point::new(3, -2),
        Point::new(-3, 2), Point::new(-3, 3), Point::new(-1, 3), Point::new(2, 1),
    ],
    [
        Point::new(1, 0), Point::new(-2, 2), Point::new(-1, -1), Point::new(-1, -2),
        Point::new(0, -4), Point::new(1, -5), Point::new(3, -6), Point::new(4, -6),
        Point::new(5, -5), Point::new(5, -4), Point::new(4, -2), Point::new(3, -1),
        Point::new(-2, 3), Point::new(0, 3), Point::new(1, 2), Point::new(-3, 1),
    ],
    [
        Point::new(1, 1), Point::new(-2, 2), Point::new(0, -1), Point::new(1, -3),
        Point::new(2, -4), Point::new(4, -5), Point::new(5, -5), Point::new(6, -4),
        Point::new(6, -3), Point::new(5, -1), Point::new(4, 0), Point::new(2, 1),
        Point::new(-2, -1), Point::new(-3, 0), Point::new(-3, 2), Point::new(-1, 3),
    ],
    [
        Point::new(0, 1), Point::new(-2, 0), Point::new(1, -2), Point::new(2, -3),
        Point::new(4, -4), Point::new(5, -4), Point::new(6, -3), Point::new(6, -2),
        Point::new(5, 0), Point::new(4, 1), Point::new(2, 2), Point::new(1, 2),
        Point::new(-3, 1), Point::new(-3, 3), Point::new(-2, 3), Point::new(-1, -2),
    ],
    [
        Point::new(-1, 2), Point::new(1, -1), Point::new(-2, 0), Point::new(3, -2),
        Point::new(4, -2), Point::new(5, -1), Point::new(5, 0), Point::new(4, 2),
        Point::new(3, 3), Point::new(1, 4), Point::new(0, 4), Point::new(-1, 3),
        Point::new(-2, -1), Point::new(0, -3), Point::new(1, -3), Point::new(-3, 2),
    ],
    [
        Point::new(2, -1), Point::new(0, -2), Point::new(-1, 1), Point::new(3, -1),
        Point::new(4, 0), Point::new(4, 1), Point::new(3, 3), Point::new(2, 4),
        Point::new(0, 5), Point::new(-1, 5), Point::new(-2, 4), Point::new(-2, 3),
        Point::new(-3, 0), Point::new(-1, -2), Point::new(-3, 1), Point::new(2, -3),
    ],
    [
        Point::new(1, 0), Point::new(-2, 1), Point::new(0, -2), Point::new(2, 1),
        Point::new(2, 2), Point::new(1, 4), Point::new(0, 5), Point::new(-2, 6),
        Point::new(-3, 6), Point::new(-4, 5), Point::new(-4, 4), Point::new(-3, 2),
        Point::new(1, -3), Point::new(3, -3), Point::new(3, -2), Point::new(-2, -1),
    ],
    [
        Point::new(1, 1), Point::new(-1, 0), Point::new(2, -2), Point::new(1, 2),
        Point::new(0, 4), Point::new(-1, 5), Point::new(-3, 6), Point::new(-4, 6),
        Point::new(-5, 5), Point::new(-5, 4), Point::new(-4, 2), Point::new(-3, 1),
        Point::new(-1, -2), Point::new(0, -3), Point::new(2, -3), Point::new(3, -1),
    ],
    [
        Point::new(0, 1), Point::new(2, -2), Point::new(-1, -1), Point::new(-1, 3),
        Point::new(-2, 4), Point::new(-4, 5), Point::new(-5, 5), Point::new(-6, 4),
        Point::new(-6, 3), Point::new(-5, 1), Point::new(-4, 0), Point::new(-2, -1),
        Point::new(2, 1), Point::new(3, 0), Point::new(3, -2), Point::new(1, -3),
    ],
    [
        Point::new(2, 0), Point::new(-1, 2), Point::new(0, -1), Point::new(-2, 3),
        Point::new(-4, 4), Point::new(-5, 4), Point::new(-6, 3), Point::new(-6, 2),
        Point::new(-5, 0), Point::new(-4, -1), Point::new(-2, -2), Point::new(-1, -2),
        Point::new(3, -1), Point::new(3, -3), Point::new(2, -3), Point::new(1, 2),
    ],
];

const EDGE_NEIGHBOURS: [[Point; 3]; 12] = [
    [Point::new(2, 0), Point::new(-1, 1), Point::new(1, -2)],
    [Point::new(1, -1), Point::new(0, 2), Point::new(-2, 1)],
    [Point::new(2, -1), Point::new(0, 2), Point::new(-1, 0)],
    [Point::new(1, 0), Point::new(-2, 2), Point::new(-1, -1)],
    [Point::new(1, 1), Point::new(-2, 2), Point::new(0, -1)],
    [Point::new(0, 1), Point::new(-2, 0), Point::new(1, -2)],
    [Point::new(-1, 2), Point::new(1, -1), Point::new(-2, 0)],
    [Point::new(2, -1), Point::new(0, -2), Point::new(-1, 1)],
    [Point::new(1, 0), Point::new(-2, 1), Point::new(0, -2)],
    [Point::new(1, 1), Point::new(-1, 0), Point::new(2, -2)],
    [Point::new(0, 1), Point::new(2, -2), Point::new(-1, -1)],
    [Point::new(2, 0), Point::new(-1, 2), Point::new(0, -1)],
];

const ORIGINS: [Point; 12] = [
    Point::new(2, 1),
    Point::new(1, 2),
    Point::new(6, 3),
    Point::new(5, 3),
    Point::new(4, 2),
    Point::new(4, 1),
    Point::new(5, 6),
    Point::new(6, 5),
    Point::new(1, 4),
    Point::new(2, 4),
    Point::new(3, 5),
    Point::new(3, 6),
];

const ORIENTATIONS: [Transform; 12] = [
    Transform::new(1, 0, 0, 0, 1, 0),
    Transform::new(0, -1, 0, 1, 1, 0),
    Transform::new(-1, -1, 0, 1, 0, 0),
    Transform::new(-1, 0, 0, 0, -1, 0),
    Transform::new(0, 1, 0, -1, -1, 0),
    Transform::new(1, 1, 0, -1, 0, 0),
    Transform::new(0, 1, 0, 1, 0, 0),
    Transform::new(-1, 0, 0, 1, 1, 0),
    Transform::new(-1, -1, 0, 0, 1, 0),
    Transform::new(0, -1, 0, -1, 0, 0),
    Transform::new(1, 0, 0, -1, -1, 0),
    Transform::new(1, 1, 0, 0, -1, 0),
];

impl Grid for Drafter {
    const CODE: char = 'D';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        &ALL_NEIGHBOURS[tile_type_checked(p)]
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        &EDGE_NEIGHBOURS[tile_type_checked(p)]
    }

    fn translatable(p: Point, q: Point) -> bool {
        tile_type(p) == tile_type(q)
    }

    fn is_valid_cell(p: Point) -> bool {
        tile_type(p).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_origin_maps_to_its_own_index() {
        for (idx, &o) in ORIGINS.iter().enumerate() {
            assert_eq!(tile_type(o), Some(idx));
        }
    }

    #[test]
    fn off_lattice_residue_is_invalid() {
        // (0 mod 7, 0 mod 7) is not one of the 12 drafter origins.
        assert_eq!(tile_type(Point::new(0, 0)), None);
        assert!(!Drafter::is_valid_cell(Point::new(0, 0)));
    }

    #[test]
    fn tile_type_is_periodic_mod_7() {
        let p = Point::new(2, 1);
        assert_eq!(tile_type(p), tile_type(Point::new(p.x + 7, p.y - 14)));
    }

    #[test]
    fn each_tile_type_has_sixteen_vertex_neighbours_and_three_edge_neighbours() {
        for o in ORIGINS {
            assert_eq!(Drafter::neighbor_vectors(o).len(), 16);
            assert_eq!(Drafter::edge_neighbor_vectors(o).len(), 3);
        }
    }

    #[test]
    fn edge_neighbours_are_a_prefix_of_vertex_neighbours() {
        for i in 0..12 {
            assert_eq!(&ALL_NEIGHBOURS[i][..3], &EDGE_NEIGHBOURS[i][..]);
        }
    }
}
