//! The triangular grid (polyiamonds). Grounded on
//! `original_source/src/iamondgrid.h`: "black"/"grey" triangle orientation
//! dispatched by `p.x mod 3`, 12 vertex-neighbors, 3 edge-neighbors, 12
//! orientations (D6 acting on the underlying triangular lattice),
//! translatable iff `(p.x - q.x) mod 3 == 0`.

use super::Grid;
use crate::geom::{Point, Transform};

pub struct Iamond;

fn is_black(p: Point) -> bool {
    p.x.rem_euclid(3) == 0
}

const ALL_BLACK: [Point; 12] = [
    Point::new(3, 0),
    Point::new(0, 3),
    Point::new(-3, 3),
    Point::new(-3, 0),
    Point::new(0, -3),
    Point::new(3, -3),
    Point::new(1, 1),
    Point::new(-2, 4),
    Point::new(-2, 1),
    Point::new(-2, -2),
    Point::new(1, -2),
    Point::new(4, -2),
];

const ALL_GREY: [Point; 12] = [
    Point::new(3, 0),
    Point::new(0, 3),
    Point::new(-3, 3),
    Point::new(-3, 0),
    Point::new(0, -3),
    Point::new(3, -3),
    Point::new(2, 2),
    Point::new(2, -1),
    Point::new(2, -4),
    Point::new(-1, -1),
    Point::new(-4, 2),
    Point::new(-1, 2),
];

const EDGE_BLACK: [Point; 3] = [Point::new(1, 1), Point::new(-2, 1), Point::new(1, -2)];
const EDGE_GREY: [Point; 3] = [Point::new(-1, -1), Point::new(2, -1), Point::new(-1, 2)];

const ORIENTATIONS: [Transform; 12] = [
    Transform::new(1, 0, 0, 0, 1, 0),
    Transform::new(-1, -1, 0, 1, 0, 0),
    Transform::new(0, 1, 0, -1, -1, 0),
    Transform::new(1, 0, 0, -1, -1, 0),
    Transform::new(0, 1, 0, 1, 0, 0),
    Transform::new(-1, -1, 0, 0, 1, 0),
    Transform::new(0, -1, 1, -1, 0, 1),
    Transform::new(-1, 0, 1, 1, 1, 1),
    Transform::new(1, 1, 1, 0, -1, 1),
    Transform::new(1, 1, 1, -1, 0, 1),
    Transform::new(-1, 0, 1, 0, -1, 1),
    Transform::new(0, -1, 1, 1, 1, 1),
];

const ORIGINS: [Point; 2] = [Point::new(0, 0), Point::new(1, 0)];

impl Grid for Iamond {
    const CODE: char = 'I';
    const ORIENTATIONS: &'static [Transform] = &ORIENTATIONS;
    const ORIGINS: &'static [Point] = &ORIGINS;

    fn neighbor_vectors(p: Point) -> &'static [Point] {
        if is_black(p) { &ALL_BLACK } else { &ALL_GREY }
    }

    fn edge_neighbor_vectors(p: Point) -> &'static [Point] {
        if is_black(p) { &EDGE_BLACK } else { &EDGE_GREY }
    }

    fn translatable(p: Point, q: Point) -> bool {
        (p.x - q.x).rem_euclid(3) == 0
    }
}
