//! The hexagon-triangle grid (poly-[3.6.3.6]). Grounded on
//! `original_source/src/grid3636.h`: tile type (hexagon, right-triangle,
//! left-triangle) dispatched by `(p.x - p.y) mod 3`; hexagons have 12
//! vertex-neighbors / 6 edge-neighbors, triangles have 6 / 3; 12
//! orientations (D6); translatable iff both cells share a tile type.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Trihex;

#[derive(Copy, Clone, PartialEq, Eq)]
enum TileType {
    Hexagon,
    TriangleRight,
    TriangleLeft,
}

fn tile_type(p: Point) -> TileType {
    match (p.x - p.y).rem_euclid(3) {
        0 => TileType::Hexagon,
        1 => TileType::TriangleRight,
        _ => TileType::TriangleLeft,
    }
}

const ALL_HEXAGON: [Point; 12] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(-2, 1),
    Point::new(-1, 2),
    Point::new(1, 1),
    Point::new(2, -1),
    Point::new(1, -2),
    Point::new(-1, -1),
];
const ALL_TRIANGLE: [Point; 6] =
    [Point::new(1, 0), Point::new(-1, 1), Point::new(0, -1), Point::new(0, 1), Point::new(1, -1), Point::new(-1, 0)];

const EDGE_HEXAGON: [Point; 6] =
    [Point::new(0, -1), Point::new(0, 1), Point::new(1, 0), Point::new(-1, 0), Point::new(1, -1), Point::new(-1, 1)];
const EDGE_TRIANGLE_RIGHT: [Point; 3] = [Point::new(0, 1), Point::new(1, -1), Point::new(-1, 0)];
const EDGE_TRIANGLE_LEFT: [Point; 3] = [Point::new(1, 0), Point::new(-1, 1), Point::new(0, -1)];

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

const ORIGINS: [Point; 3] = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];

impl Grid for Trihex {
    const CODE: char = 'T';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        match tile_type(p) {
            TileType::Hexagon => &ALL_HEXAGON,
            TileType::TriangleRight | TileType::TriangleLeft => &ALL_TRIANGLE,
        }
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        match tile_type(p) {
            TileType::Hexagon => &EDGE_HEXAGON,
            TileType::TriangleRight => &EDGE_TRIANGLE_RIGHT,
            TileType::TriangleLeft => &EDGE_TRIANGLE_LEFT,
        }
    }

    fn translatable(p: Point, q: Point) -> bool {
        tile_type(p) == tile_type(q)
    }
}
