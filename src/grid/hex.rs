//! The hexagonal grid (polyhexes). Grounded on
//! `original_source/src/hexgrid.h` for the shape of the family (6 neighbors
//! == 6 edge-neighbors, single translational class, 12 orientations); the
//! concrete vector/orientation tables are reused verbatim from
//! `grid3636.h`'s `HEXAGON` tile-type row, since a standalone hex grid's
//! edge-adjacency and D6 symmetry group is the same lattice backbone as the
//! hexagon cells of the 3.6.3.6 tiling (see DESIGN.md).

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Hex;

const NEIGHBOURS: [Point; 6] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(1, -1),
    Point::new(-1, 1),
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

const ORIGINS: [Point; 1] = [Point::new(0, 0)];

impl Grid for Hex {
    const CODE: char = 'H';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(_p: Point) -> &'static [Point] {
        &NEIGHBOURS
    }

    fn edge_neighbor_vectors(_p: Point) -> &'static [Point] {
        &NEIGHBOURS
    }

    fn translatable(_p: Point, _q: Point) -> bool {
        true
    }
}
