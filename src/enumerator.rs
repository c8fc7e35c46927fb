//! Minimal breadth-first-by-cell-count polyform enumerator backing the
//! `gen` subcommand (spec §6.2, §9). Out of the core's algorithmic scope
//! (spec §1): `HeeschSolver`/`Cloud`/`HoleFinder` don't depend on this
//! module. Grounded on `original_source/src/redelmeier.h`'s
//! `RedelmeierSimple` (fixed-polyform backtracking over untried
//! edge-neighbor cells) and `FreeFilter` (lex-min-orientation canonicality
//! check, spec §9's free-polyform note).

use std::collections::HashMap;

use crate::{
    geom::Point,
    grid::{EdgeNeighbours, Grid},
    shape::Shape,
};

#[derive(Copy, Clone, PartialEq, Eq)]
enum CellStatus {
    Occupied,
    Reachable,
}

/// Enumerates every fixed polyform of exactly `size` cells, one per
/// distinct cell set (orientations and reflections are all emitted as
/// separate shapes; see [`enumerate_free`] to collapse symmetric copies).
pub fn enumerate_fixed<G: Grid>(size: usize) -> Vec<Shape<G>> {
    let mut out = Vec::new();
    for &origin in G::ORIGINS {
        let mut cells: HashMap<Point, CellStatus> = HashMap::new();
        let mut untried = vec![origin];
        solve::<G>(size, 0, origin, &mut cells, &mut untried, &mut out);
    }
    out
}

fn solve<G: Grid>(
    remaining: usize,
    from: usize,
    origin: Point,
    cells: &mut HashMap<Point, CellStatus>,
    untried: &mut Vec<Point>,
    out: &mut Vec<Shape<G>>,
) {
    if remaining == 0 {
        let mut shape = Shape::new();
        for (&p, &status) in cells.iter() {
            if status == CellStatus::Occupied {
                shape.add(p);
            }
        }
        shape.complete();
        out.push(shape);
        return;
    }

    let untried_len = untried.len();
    for idx in from..untried_len {
        let p = untried[idx];
        cells.insert(p, CellStatus::Occupied);

        for pn in EdgeNeighbours::<G>::new(p) {
            if pn < origin || cells.contains_key(&pn) {
                continue;
            }
            if !untried.contains(&pn) {
                untried.push(pn);
            }
        }

        solve::<G>(remaining - 1, idx + 1, origin, cells, untried, out);

        cells.insert(p, CellStatus::Reachable);
        untried.truncate(untried_len);
    }

    for &p in &untried[from..untried_len] {
        cells.remove(&p);
    }
}

/// Filters fixed polyforms down to one representative per free polyform
/// (an equivalence class under `G::ORIENTATIONS`), choosing the
/// lexicographically-smallest untranslated orientation as the
/// representative, matching `FreeFilter::checkShape`'s asymmetric-shortcut
/// plus explicit-symmetric-storage approach.
pub fn enumerate_free<G: Grid>(size: usize) -> Vec<Shape<G>> {
    let mut seen_symmetric: Vec<Shape<G>> = Vec::new();
    let mut out = Vec::new();

    for shape in enumerate_fixed::<G>(size) {
        let mut canon = shape.clone();
        canon.untranslate();

        let mut is_symmetric = false;
        let mut is_canonical = true;

        for &t in G::ORIENTATIONS.iter().skip(1) {
            let mut tshape = Shape::new();
            tshape.reset(&canon, t);
            tshape.untranslate();

            match tshape.compare(&canon) {
                std::cmp::Ordering::Less => {
                    is_canonical = false;
                    break;
                }
                std::cmp::Ordering::Equal => {
                    is_symmetric = true;
                }
                std::cmp::Ordering::Greater => {}
            }
        }

        if !is_canonical {
            continue;
        }

        if is_symmetric {
            let mut min_shape = canon.clone();
            for &t in G::ORIENTATIONS.iter().skip(1) {
                let mut tshape = Shape::new();
                tshape.reset(&canon, t);
                tshape.untranslate();
                if tshape.compare(&min_shape) == std::cmp::Ordering::Less {
                    min_shape = tshape;
                }
            }

            if seen_symmetric.iter().any(|s| s.compare(&min_shape) == std::cmp::Ordering::Equal) {
                continue;
            }
            seen_symmetric.push(min_shape);
        }

        out.push(canon);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::omino::Omino;

    #[test]
    fn enumerates_one_monomino() {
        let shapes = enumerate_fixed::<Omino>(1);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].len(), 1);
    }

    #[test]
    fn enumerates_two_fixed_dominoes() {
        // One horizontal, one vertical -- fixed (not free) polyforms.
        let shapes = enumerate_fixed::<Omino>(2);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn free_dominoes_collapse_to_one_shape() {
        let shapes = enumerate_free::<Omino>(2);
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn free_trominoes_are_two_shapes() {
        // The straight and L trominoes.
        let shapes = enumerate_free::<Omino>(3);
        assert_eq!(shapes.len(), 2);
    }
}
