//! The square-octagon grid (poly-[4.8.8]). Grounded on
//! `original_source/src/octasquaregrid.h`: tile type (square vs. octagon)
//! dispatched by `(p.x + p.y) mod 2`; squares have 4 neighbors (their edge
//! neighbors), octagons have 8 (all of which are edge-adjacent too); 8
//! orientations (D4); translatable iff both cells share a tile type.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Octasquare;

#[derive(Copy, Clone, PartialEq, Eq)]
enum TileType {
    Square,
    Octagon,
}

fn tile_type(p: Point) -> TileType {
    if (p.x + p.y).rem_euclid(2) == 0 { TileType::Square } else { TileType::Octagon }
}

const ALL_NEIGHBOURS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

const EDGE_NEIGHBOURS: [Point; 4] =
    [Point::new(0, -1), Point::new(-1, 0), Point::new(1, 0), Point::new(0, 1)];

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

const ORIGINS: [Point; 2] = [Point::new(0, 0), Point::new(1, 0)];

impl Grid for Octasquare {
    const CODE: char = 'o';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        match tile_type(p) {
            TileType::Square => &EDGE_NEIGHBOURS,
            TileType::Octagon => &ALL_NEIGHBOURS,
        }
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        Self::neighbor_vectors(p)
    }

    fn translatable(p: Point, q: Point) -> bool {
        tile_type(p) == tile_type(q)
    }
}
