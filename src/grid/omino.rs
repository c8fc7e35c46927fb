//! The square-cell grid (polyominoes). Grounded on
//! `original_source/src/ominogrid.h`: position-independent tables, the full
//! D4 dihedral symmetry group (8 orientations), a single translational
//! equivalence class.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Omino;

const ALL_NEIGHBOURS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
];

const EDGE_NEIGHBOURS: [Point; 4] =
    [Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)];

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

const ORIGINS: [Point; 1] = [Point::new(0, 0)];

impl Grid for Omino {
    const CODE: char = 'O';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(_p: Point) -> &'static [Point] {
        &ALL_NEIGHBOURS
    }

    fn edge_neighbor_vectors(_p: Point) -> &'static [Point] {
        &EDGE_NEIGHBOURS
    }

    fn translatable(_p: Point, _q: Point) -> bool {
        true
    }
}
