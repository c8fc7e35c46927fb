//! HeeschSolver: incremental SAT encoding of the k-corona existence problem
//! (spec §4.6). Grounded on `original_source/src/heesch.h` (clause families,
//! the CEGAR hole-exclusion loop, `extendLevelWithTransforms`) and on the
//! teacher's `src/solver.rs` (`Solver`/`SolveError`/the `try_solve` shape) and
//! `src/main.rs` (the incremental re-solve-after-add-clause pattern, here
//! adapted into the per-level CEGAR loop instead of a cardinality ladder).

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use log::{debug, trace};
use petgraph::adj::IndexType;
use rustsat::{
    instances::{BasicVarManager, ManageVars},
    solvers::{Interrupt, InterruptSolver, Solve, SolverResult},
    types::{Assignment, Clause, Var},
};
use rustsat_glucose::simp::Glucose as GlucoseSimp;

use crate::{
    cloud::Cloud,
    config::OrientationSubset,
    geom::{Point, Transform},
    grid::Grid,
    holes::HoleFinder,
    shape::Shape,
    typed_ix::TypedIx,
};

/// A concrete placement realizing one corona level, as `(level, transform)`
/// pairs (spec's "Patch").
pub type Patch = Vec<(usize, Transform)>;

/// Result of a single `hasCorona(level)` query (spec §7's tagged union).
#[derive(Debug, Clone)]
pub enum CoronaResult {
    /// No corona exists at this level, with or without adjacency holes.
    None,
    /// A corona exists with every outer placement's adjacency hole-free.
    HoleFree(Patch),
    /// A corona exists, but only by allowing adjacency holes in the outer
    /// corona (or a hole-free search exhausted the SAT instance before
    /// finding one).
    HasHoles(Patch),
    /// The SAT oracle was interrupted before a definite answer was reached.
    Inconclusive,
}

pub type PlacementIx = TypedIx<Placement>;
pub type CellIx = TypedIx<CellRecord>;

/// A transform together with the cells it covers and the corona levels at
/// which it has been materialized (spec's `TilePlacement`).
pub struct Placement {
    t: Transform,
    cells: Vec<CellIx>,
    /// `level -> SAT variable` meaning "this placement is used at this
    /// corona level". A `BTreeMap` rather than a dense vector: most
    /// placements only ever carry one or two levels.
    vars: BTreeMap<usize, Var>,
}

/// A grid cell plus the SAT variable meaning "this cell is covered by some
/// used placement" and the placements that can cover it (spec's
/// `CellRecord`).
pub struct CellRecord {
    #[allow(dead_code)]
    pos: Point,
    var: Var,
    placements: Vec<PlacementIx>,
}

/// Incremental SAT-encoded search for k-coronas of a shape (spec §4.6).
/// Tile placements and cell records are allocated on demand and referenced
/// by stable arena indices, never destroyed before the solver itself is
/// dropped.
pub struct HeeschSolver<G: Grid> {
    shape: Shape<G>,
    cloud: Cloud<G>,
    placements: Vec<Placement>,
    cells: Vec<CellRecord>,
    placement_index: std::collections::HashMap<Transform, PlacementIx>,
    cell_index: std::collections::HashMap<Point, CellIx>,
    var_mgr: BasicVarManager,
    level: usize,
    /// Slot a caller (`main.rs`'s `ctrlc` handler) can poll to interrupt the
    /// SAT solver currently backing [`has_corona`][`Self::has_corona`]. A new
    /// incremental solver is built per call, so the slot is refreshed on
    /// every solve rather than held for the solver's whole lifetime.
    interrupt_slot: Option<Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>>>,
}

impl<G: Grid> HeeschSolver<G> {
    pub fn new(shape: Shape<G>) -> Self {
        Self::new_with_orientations(shape, OrientationSubset::All)
    }

    /// Builds a solver restricted to a subset of the grid's symmetry group
    /// (spec §6.2's `-translations`/`-rotations` flags), narrowing which
    /// placements the underlying [`Cloud`] ever considers rather than
    /// filtering a fully built one.
    pub fn new_with_orientations(shape: Shape<G>, orientations: OrientationSubset) -> Self {
        let cloud = Cloud::new_filtered(shape.clone(), |t| match orientations {
            OrientationSubset::All => true,
            OrientationSubset::RotationsOnly => t.det() == 1,
            OrientationSubset::TranslationsOnly => t.is_translation(),
        });
        let mut solver = HeeschSolver {
            shape,
            cloud,
            placements: Vec::new(),
            cells: Vec::new(),
            placement_index: std::collections::HashMap::new(),
            cell_index: std::collections::HashMap::new(),
            var_mgr: BasicVarManager::default(),
            level: 0,
            interrupt_slot: None,
        };
        solver.get_shape_variable(Transform::IDENTITY, 0);
        solver
    }

    /// Registers a slot `has_corona` refreshes with each incremental
    /// solver's interrupter, so a `ctrlc` handler elsewhere can abort an
    /// in-flight solve (spec §7's `Interrupted` outcome).
    pub fn set_interrupt_slot(&mut self, slot: Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>>) {
        self.interrupt_slot = Some(slot);
    }

    pub fn cloud(&self) -> &Cloud<G> {
        &self.cloud
    }

    pub fn level(&self) -> usize {
        self.level
    }

    fn ensure_cell(&mut self, p: Point) -> CellIx {
        if let Some(&ix) = self.cell_index.get(&p) {
            return ix;
        }
        let ix: CellIx = IndexType::new(self.cells.len());
        let var = self.var_mgr.new_var();
        self.cells.push(CellRecord { pos: p, var, placements: Vec::new() });
        self.cell_index.insert(p, ix);
        ix
    }

    fn create_placement(&mut self, t: Transform) -> PlacementIx {
        let idx: PlacementIx = IndexType::new(self.placements.len());
        self.placements.push(Placement { t, cells: Vec::new(), vars: BTreeMap::new() });
        self.placement_index.insert(t, idx);

        let shape_cells: Vec<Point> = self.shape.cells().to_vec();
        let mut cell_ixs = Vec::with_capacity(shape_cells.len());
        for p in shape_cells {
            let cix = self.ensure_cell(t * p);
            self.cells[cix.index()].placements.push(idx);
            cell_ixs.push(cix);
        }
        self.placements[idx.index()].cells = cell_ixs;
        idx
    }

    /// Returns the SAT variable meaning "placement `T` is used at `level`",
    /// materializing the placement (and its cells) if this is the first time
    /// `T` has been seen.
    fn get_shape_variable(&mut self, t: Transform, level: usize) -> Var {
        let idx = match self.placement_index.get(&t) {
            Some(&ix) => ix,
            None => self.create_placement(t),
        };
        if let Some(&v) = self.placements[idx.index()].vars.get(&level) {
            return v;
        }
        let v = self.var_mgr.new_var();
        self.placements[idx.index()].vars.insert(level, v);
        v
    }

    fn placement_at(&self, t: &Transform) -> Option<&Placement> {
        self.placement_index.get(t).map(|&ix| &self.placements[ix.index()])
    }

    /// Materializes level-`(lev+1)` placements for every placement already
    /// carrying a level-`lev` variable, composed with each transform in
    /// `transforms`. Mirrors `heesch.h`'s `extendLevelWithTransforms`,
    /// including its deliberately disabled "skip transforms already
    /// classified in the cloud" optimization (spec §9's open question): every
    /// composition is materialized, so an interior placement's halo cells
    /// are always covered by the time clause generation needs them.
    fn extend_level_with_transforms(&mut self, lev: usize, transforms: &[Transform]) {
        let snapshot_len = self.placements.len();
        for i in 0..snapshot_len {
            if !self.placements[i].vars.contains_key(&lev) {
                continue;
            }
            let told = self.placements[i].t;
            for &t in transforms {
                let tnew = told * t;
                if tnew.is_identity() {
                    continue;
                }
                self.get_shape_variable(tnew, lev + 1);
            }
        }
    }

    /// Advances to the next corona level, materializing the placements
    /// reachable by one more edge-adjacency hop (spec §4.6.1).
    pub fn increase_level(&mut self) {
        self.level += 1;
        let adjacent: Vec<Transform> = self.cloud.adjacent().copied().collect();
        if self.level == 1 {
            for t in adjacent {
                self.get_shape_variable(t, 1);
            }
        } else {
            self.extend_level_with_transforms(self.level - 1, &adjacent);
        }
    }

    /// Extends placements carrying a level-`(level-1)` variable with
    /// hole-adjacent compositions at `level`, used when no hole-free corona
    /// exists and the search must allow adjacency holes in the outer corona.
    fn add_holes_to_level(&mut self, level: usize) {
        let hole_adjacent: Vec<Transform> = self.cloud.hole_adjacent().copied().collect();
        self.extend_level_with_transforms(level - 1, &hole_adjacent);
    }

    /// Builds every clause family of spec §4.6.2 for a query targeting
    /// `level`. A pre-pass (mirroring the non-const `getCellVariable`
    /// overload used throughout the reference clause builder) ensures every
    /// cell referenced by an interior placement's halo exists before clauses
    /// are emitted, rather than splitting const/non-const variants as the
    /// original does.
    fn get_clauses(&mut self, level: usize, allow_holes: bool) -> Vec<Clause> {
        let halo: Vec<Point> = self.cloud.halo().to_vec();
        let mut needed = Vec::new();
        for pl in &self.placements {
            for &k in pl.vars.keys() {
                if k < level {
                    needed.extend(halo.iter().map(|&hp| pl.t * hp));
                }
            }
        }
        for p in needed {
            self.ensure_cell(p);
        }

        let mut clauses = Vec::new();

        // 1. Kernel must exist.
        let kernel_var = self.placements[0].vars[&0];
        clauses.push(Clause::from_iter([kernel_var.pos_lit()]));

        // 2. Placement implies its cells.
        for pl in &self.placements {
            for &cix in &pl.cells {
                let cell_var = self.cells[cix.index()].var;
                for &v in pl.vars.values() {
                    clauses.push(Clause::from_iter([v.neg_lit(), cell_var.pos_lit()]));
                }
            }
        }

        // 3. Cell implies some placement.
        for cell in &self.cells {
            let mut lits = vec![cell.var.neg_lit()];
            for &pix in &cell.placements {
                lits.extend(self.placements[pix.index()].vars.values().map(|v| v.pos_lit()));
            }
            clauses.push(Clause::from_iter(lits));
        }

        // 4. Interior placements' haloes are covered.
        for pl in &self.placements {
            for (&k, &v) in &pl.vars {
                if k >= level {
                    continue;
                }
                for &hp in &halo {
                    let tp = pl.t * hp;
                    if let Some(&cix) = self.cell_index.get(&tp) {
                        let cell_var = self.cells[cix.index()].var;
                        clauses.push(Clause::from_iter([v.neg_lit(), cell_var.pos_lit()]));
                    }
                }
            }
        }

        // 5. No overlap.
        for pl in &self.placements {
            for m in self.cloud.overlapping() {
                let tn = pl.t * *m;
                if let Some(other) = self.placement_at(&tn) {
                    for &iv in pl.vars.values() {
                        for &jv in other.vars.values() {
                            clauses.push(Clause::from_iter([iv.neg_lit(), jv.neg_lit()]));
                        }
                    }
                }
            }
        }

        // 6+7. Corona connectivity and no-backward-jumps.
        for pl in &self.placements {
            for (&k, &v) in &pl.vars {
                if k < 1 {
                    continue;
                }
                let mut lits = vec![v.neg_lit()];
                for m in self.cloud.adjacent() {
                    let tn = pl.t * *m;
                    let Some(other) = self.placement_at(&tn) else { continue };
                    for (&m_level, &w) in &other.vars {
                        if m_level == k - 1 {
                            lits.push(w.pos_lit());
                        } else if m_level < k - 1 {
                            clauses.push(Clause::from_iter([v.neg_lit(), w.neg_lit()]));
                        }
                    }
                }
                if lits.len() > 1 {
                    clauses.push(Clause::from_iter(lits));
                }

                // 8. Outer corona has no adjacency holes, unless allowed.
                if !allow_holes && k == level {
                    for m in self.cloud.hole_adjacent() {
                        let tn = pl.t * *m;
                        let Some(other) = self.placement_at(&tn) else { continue };
                        if let Some(&w) = other.vars.get(&k) {
                            clauses.push(Clause::from_iter([v.neg_lit(), w.neg_lit()]));
                        }
                    }
                }
            }
        }

        clauses
    }

    fn extract_patch(&self, assignment: &Assignment) -> Patch {
        let mut patch = Vec::new();
        for pl in &self.placements {
            for (&k, &v) in &pl.vars {
                if assignment.var_value(v).to_bool_with_def(false) {
                    patch.push((k, pl.t));
                    break;
                }
            }
        }
        patch
    }

    fn find_holes(&self, assignment: &Assignment) -> Vec<Vec<usize>> {
        let mut finder = HoleFinder::new(&self.shape);
        for (idx, pl) in self.placements.iter().enumerate() {
            for &v in pl.vars.values() {
                if assignment.var_value(v).to_bool_with_def(false) {
                    finder.add_copy(idx, pl.t);
                    break;
                }
            }
        }
        finder.get_holes()
    }

    /// The main query (spec §4.6.3): does a `level`-corona exist? Iteratively
    /// refines away holes found in the outermost corona via the CEGAR loop
    /// before falling back to a search that allows them.
    pub fn has_corona(&mut self, level: usize) -> anyhow::Result<CoronaResult> {
        trace!(target: "cegar", "querying corona at level {level}");
        if level == 0 {
            return Ok(CoronaResult::HoleFree(vec![(0, Transform::IDENTITY)]));
        }
        if !self.cloud.surroundable() {
            debug!(target: "cegar", "shape is not surroundable, level {level} has no corona");
            return Ok(CoronaResult::None);
        }

        let clauses = self.get_clauses(level, false);
        let mut solver = GlucoseSimp::default();
        if let Some(slot) = &self.interrupt_slot {
            *slot.lock().expect("interrupt slot mutex was poisoned") =
                Some(Box::new(solver.interrupter()));
        }
        for cl in clauses {
            solver.add_clause(cl).context("failed to add clause to incremental SAT solver")?;
        }

        match solver.solve().context("SAT solve failed")? {
            SolverResult::Sat => {
                let mut assignment =
                    solver.full_solution().context("SAT solver reported SAT without a model")?;
                let mut patch = self.extract_patch(&assignment);
                loop {
                    let holes = self.find_holes(&assignment);
                    if holes.is_empty() {
                        return Ok(CoronaResult::HoleFree(patch));
                    }
                    debug!(target: "hole_detect", "level {level}: excluding {} hole(s) and re-solving", holes.len());
                    for hole in &holes {
                        let lits: Vec<_> = hole
                            .iter()
                            .map(|&pidx| self.placements[pidx].vars[&level].neg_lit())
                            .collect();
                        solver
                            .add_clause(Clause::from_iter(lits))
                            .context("failed to add hole-exclusion clause")?;
                    }
                    match solver.solve().context("SAT solve failed")? {
                        SolverResult::Sat => {
                            assignment = solver
                                .full_solution()
                                .context("SAT solver reported SAT without a model")?;
                            patch = self.extract_patch(&assignment);
                        }
                        SolverResult::Unsat => return Ok(CoronaResult::HasHoles(patch)),
                        SolverResult::Interrupted => return Ok(CoronaResult::Inconclusive),
                    }
                }
            }
            SolverResult::Unsat => {
                self.add_holes_to_level(level);
                let clauses = self.get_clauses(level, true);
                let mut solver = GlucoseSimp::default();
                if let Some(slot) = &self.interrupt_slot {
                    *slot.lock().expect("interrupt slot mutex was poisoned") =
                        Some(Box::new(solver.interrupter()));
                }
                for cl in clauses {
                    solver.add_clause(cl).context("failed to add clause to incremental SAT solver")?;
                }
                match solver.solve().context("SAT solve failed")? {
                    SolverResult::Sat => {
                        let assignment = solver
                            .full_solution()
                            .context("SAT solver reported SAT without a model")?;
                        Ok(CoronaResult::HasHoles(self.extract_patch(&assignment)))
                    }
                    SolverResult::Unsat => Ok(CoronaResult::None),
                    SolverResult::Interrupted => Ok(CoronaResult::Inconclusive),
                }
            }
            SolverResult::Interrupted => Ok(CoronaResult::Inconclusive),
        }
    }

    /// Every distinct transform carrying a placement variable at `level`
    /// (the `surrounds` subcommand's output, spec §6.2), optionally
    /// restricted to proper rotations/translations (`-noreflections`) and/or
    /// to placements whose only materialized level is this one
    /// (`-extremes`: newly reachable placements, as opposed to ones already
    /// present at an earlier level too).
    pub fn surrounds_at_level(&self, level: usize, no_reflections: bool, extremes_only: bool) -> Vec<Transform> {
        let mut out: Vec<Transform> = self
            .placements
            .iter()
            .filter(|pl| pl.vars.contains_key(&level))
            .filter(|pl| !no_reflections || pl.t.det() == 1)
            .filter(|pl| !extremes_only || pl.vars.len() == 1)
            .map(|pl| pl.t)
            .collect();
        out.sort_by_key(|t| (t.a, t.b, t.c, t.d, t.e, t.f));
        out
    }

    /// Simplified Conway-criterion isohedral shortcut (spec §4.6.4): looks
    /// for two adjacent translations whose inverses are also adjacent, whose
    /// difference is adjacent, and whose eight derived placements jointly
    /// cover the kernel's entire halo. Detects only this 4-translation case;
    /// more general isohedral tilings (half-turn, glide) are a known
    /// limitation (spec §9).
    pub fn isohedral_shortcut(&self) -> Option<Patch> {
        if !self.cloud.surroundable() {
            return None;
        }
        let translations: Vec<Transform> =
            self.cloud.adjacent().filter(|t| t.is_translation()).copied().collect();

        for &t1 in &translations {
            if !self.cloud.is_adjacent(&t1.invert()) {
                continue;
            }
            for &t2 in &translations {
                if t2 == t1 || !self.cloud.is_adjacent(&t2.invert()) {
                    continue;
                }
                if !self.cloud.is_adjacent(&(t2 * t1.invert())) {
                    continue;
                }

                let eight = [
                    t1,
                    t1.invert(),
                    t2,
                    t2.invert(),
                    t1 * t2.invert(),
                    t2 * t1.invert(),
                    t1 * t2,
                    t1.invert() * t2.invert(),
                ];

                let covers_all = self.cloud.halo().iter().all(|&hp| {
                    eight.iter().any(|&t| self.shape.cells().iter().any(|&p| t * p == hp))
                });

                if covers_all {
                    let mut patch = vec![(0, Transform::IDENTITY)];
                    patch.extend(eight.iter().map(|&t| (1, t)));
                    return Some(patch);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{hex::Hex, omino::Omino};

    fn shape_of<G: Grid>(cells: &[(i32, i32)]) -> Shape<G> {
        let mut s = Shape::new();
        for &(x, y) in cells {
            s.add(Point::new(x, y));
        }
        s.complete();
        s
    }

    /// Builds the union shape of every placement in `patch` at level `<=
    /// max_level`, without deduplicating cells, so overlaps can be detected
    /// before [`Shape::complete`] would otherwise hide them.
    fn patch_union_cells<G: Grid>(shape: &Shape<G>, patch: &Patch, max_level: usize) -> Vec<Point> {
        patch
            .iter()
            .filter(|&&(level, _)| level <= max_level)
            .flat_map(|&(_, t)| shape.cells().iter().map(move |&p| t * p))
            .collect()
    }

    fn patch_union_shape<G: Grid>(shape: &Shape<G>, patch: &Patch, max_level: usize) -> Shape<G> {
        let mut s = Shape::new();
        for p in patch_union_cells(shape, patch, max_level) {
            s.add(p);
        }
        s.complete();
        s
    }

    /// Checks the §8 structural invariants of a patch returned by
    /// `has_corona(k)`, rather than just the reported corona level: no two
    /// placements overlap, each level's halo is fully covered by the next
    /// level's placements, and the patch as a whole has no holes.
    fn assert_patch_invariants<G: Grid>(shape: &Shape<G>, patch: &Patch, k: usize) {
        let all_cells = patch_union_cells(shape, patch, k);
        let mut seen = std::collections::HashSet::new();
        for p in all_cells {
            assert!(seen.insert(p), "patch placements overlap at cell {p}");
        }

        for level in 0..k {
            let so_far = patch_union_shape(shape, patch, level);
            let (halo, _border) = so_far.get_halo_and_border();
            let next: std::collections::HashSet<Point> =
                patch_union_cells(shape, patch, level + 1).into_iter().collect();
            for hp in halo {
                assert!(next.contains(&hp), "halo cell {hp} at level {level} not covered by level {}", level + 1);
            }
        }

        let whole = patch_union_shape(shape, patch, k);
        assert!(whole.simply_connected(), "patch union has a hole");
    }

    #[test]
    fn level_zero_is_always_hole_free() {
        let mut solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0)]));
        match solver.has_corona(0).unwrap() {
            CoronaResult::HoleFree(patch) => assert_eq!(patch, vec![(0, Transform::IDENTITY)]),
            other => panic!("expected HoleFree, got {other:?}"),
        }
    }

    #[test]
    fn single_square_is_isohedral() {
        let solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0)]));
        assert!(solver.isohedral_shortcut().is_some());
    }

    #[test]
    fn single_square_has_hole_free_level_one_corona() {
        let mut solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0)]));
        solver.increase_level();
        match solver.has_corona(1).unwrap() {
            CoronaResult::HoleFree(patch) => {
                // kernel + a full ring of 8 neighbors, each at level 1.
                assert_eq!(patch.iter().filter(|&&(lvl, _)| lvl == 0).count(), 1);
                assert_eq!(patch.iter().filter(|&&(lvl, _)| lvl == 1).count(), 8);
            }
            other => panic!("expected HoleFree, got {other:?}"),
        }
    }

    #[test]
    fn t_tetromino_has_hole_free_level_two_corona() {
        let mut solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0), (1, 0), (2, 0), (1, 1)]));
        solver.increase_level();
        solver.has_corona(1).unwrap();
        solver.increase_level();
        match solver.has_corona(2).unwrap() {
            CoronaResult::HoleFree(_) | CoronaResult::HasHoles(_) => {}
            CoronaResult::None | CoronaResult::Inconclusive => {
                panic!("expected a level-2 corona to exist for the T-tetromino")
            }
        }
    }

    #[test]
    fn straight_triomino_is_isohedral() {
        let solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0), (1, 0), (2, 0)]));
        let patch = solver.isohedral_shortcut().expect("straight triomino should tile isohedrally");
        assert_patch_invariants(&solver.shape, &patch, 1);
    }

    #[test]
    fn l_tetromino_is_isohedral() {
        let solver = HeeschSolver::new(shape_of::<Omino>(&[(0, 0), (1, 0), (2, 0), (0, 1)]));
        let patch = solver.isohedral_shortcut().expect("L-tetromino should tile isohedrally");
        assert_patch_invariants(&solver.shape, &patch, 1);
    }

    /// The "propeller" polyhex (spec §8 scenario 5): `H 0 0 1 0 0 1 2 0 -1 1`
    /// reaches a hole-free level-2 corona (`~ 2 2`, i.e. Hc == Hh == 2).
    #[test]
    fn propeller_polyhex_has_hole_free_level_two_corona() {
        let shape = shape_of::<Hex>(&[(0, 0), (1, 0), (0, 1), (2, 0), (-1, 1)]);
        let mut solver = HeeschSolver::new(shape);
        solver.increase_level();
        let level_one = match solver.has_corona(1).unwrap() {
            CoronaResult::HoleFree(patch) => patch,
            other => panic!("expected a hole-free level-1 corona, got {other:?}"),
        };
        assert_patch_invariants(&solver.shape, &level_one, 1);

        solver.increase_level();
        match solver.has_corona(2).unwrap() {
            CoronaResult::HoleFree(patch) => {
                assert!(patch.iter().any(|&(lvl, _)| lvl == 2));
                assert_patch_invariants(&solver.shape, &patch, 2);
            }
            other => panic!("expected ~ 2 2 (hole-free level-2 corona), got {other:?}"),
        }
    }

    #[test]
    fn two_disjoint_cells_are_not_surroundable_is_false_but_shape_itself_has_a_hole() {
        // A disconnected "shape" still constructs (Shape doesn't enforce
        // connectivity itself); its own cell set read as a 1-placement patch
        // has a hole, which is HoleFinder's job to detect, not the solver's.
        let shape = shape_of::<Omino>(&[(0, 0), (5, 5)]);
        let mut finder = HoleFinder::new(&shape);
        finder.add_copy(0, Transform::IDENTITY);
        assert!(finder.has_holes());
    }
}
