//! Solver selection and the shared pieces of every tour solver.
//!
//! # Pluggability
//!
//! Each algorithm implements [`TourSolver`].  Callers that pick a solver at
//! runtime go through the closed [`SolverKind`] enum, so the set of
//! selectable solvers is fixed at compile time.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use wf_core::CityId;
use wf_world::{Path, World};

use crate::exhaustive::{BreadthFirst, DepthFirst};
use crate::heuristic::{Greedy, SpanningTreeTour};
use crate::{SolveError, SolveResult};

// ── TourSolver trait ──────────────────────────────────────────────────────────

/// A closed-tour algorithm.
pub trait TourSolver {
    /// Find a closed walk that leaves `start`, visits every city, and returns
    /// to `start`.  Every solver but `SpanningTreeTour` visits each city
    /// exactly once.
    ///
    /// Fails with [`SolveError::CityOutOfRange`] before doing any work if
    /// `start` is not a city of `world`.  Returns `Ok(None)` when the
    /// algorithm finds no walk over the roads present.
    fn solve(&self, world: &World, start: CityId) -> SolveResult<Option<Path>>;
}

// ── SolverKind ────────────────────────────────────────────────────────────────

/// The tour solvers selectable by name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SolverKind {
    /// Exhaustive breadth-first enumeration.  Exact; memory grows
    /// combinatorially with city count.
    Bfs,
    /// Exhaustive depth-first search with pruning.  Exact.
    Dfs,
    /// Preorder walk of the minimum spanning tree, falling back to the
    /// tree's double traversal when a shortcut road is missing.  Fast, not
    /// optimal, and not always a tour on sparse worlds.
    Mst,
    /// Nearest neighbour first, backtracking out of dead ends.  Fast, not
    /// optimal.
    Greedy,
}

impl SolverKind {
    pub const ALL: [SolverKind; 4] = [SolverKind::Bfs, SolverKind::Dfs, SolverKind::Mst, SolverKind::Greedy];

    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::Bfs    => "bfs",
            SolverKind::Dfs    => "dfs",
            SolverKind::Mst    => "mst",
            SolverKind::Greedy => "greedy",
        }
    }

    /// `true` for the solvers guaranteed to return a shortest tour.
    pub fn is_exact(self) -> bool {
        matches!(self, SolverKind::Bfs | SolverKind::Dfs)
    }

    /// Run the algorithm this kind names.  The start city is checked by the
    /// solver itself.
    pub fn solve(self, world: &World, start: CityId) -> SolveResult<Option<Path>> {
        match self {
            SolverKind::Bfs    => BreadthFirst.solve(world, start),
            SolverKind::Dfs    => DepthFirst.solve(world, start),
            SolverKind::Mst    => SpanningTreeTour.solve(world, start),
            SolverKind::Greedy => Greedy.solve(world, start),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = SolveError;

    fn from_str(s: &str) -> SolveResult<Self> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolveError::UnknownSolver(s.to_owned()))
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Solve the closed-tour problem on `world` from `start` with the chosen
/// solver, recording the time spent on the returned path.
///
/// Fails with [`SolveError::CityOutOfRange`] before doing any work if
/// `start` is not a city of `world`.
pub fn solve_tour(world: &World, kind: SolverKind, start: CityId) -> SolveResult<Option<Path>> {
    let t0 = Instant::now();
    let tour = kind.solve(world, start)?;
    let elapsed = t0.elapsed();

    match &tour {
        Some(t) => log::debug!("{kind}: tour of length {:.3} in {elapsed:?}", t.distance()),
        None    => log::debug!("{kind}: no tour from {start} ({elapsed:?})"),
    }
    Ok(tour.map(|t| t.with_elapsed(elapsed)))
}

pub(crate) fn check_city(world: &World, id: CityId) -> SolveResult<()> {
    if world.contains(id) {
        Ok(())
    } else {
        Err(SolveError::CityOutOfRange { id, city_count: world.city_count() })
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Close a path that already covers every city back to its start, if the
/// last city has a road home.
pub(crate) fn close_tour(world: &World, path: &Path) -> SolveResult<Option<Path>> {
    let start = path.start();
    if world.city(path.end()).is_adjacent(start) {
        Ok(Some(path.extended(world, start)?))
    } else {
        Ok(None)
    }
}

/// Keep `best` unless `candidate` is strictly shorter; the first of equal
/// tours wins.
pub(crate) fn shorter(best: Option<Path>, candidate: Path) -> Option<Path> {
    match best {
        Some(b) if b.distance() <= candidate.distance() => Some(b),
        _ => Some(candidate),
    }
}

/// One level of a backtracking walk: the cities still to try from the
/// current end of the path.
pub(crate) struct Frame {
    candidates: Vec<CityId>,
    next:       usize,
}

impl Frame {
    /// Unvisited cities from `order`, kept in that order.
    pub(crate) fn new(order: &[CityId], visited: &[bool]) -> Self {
        let candidates = order.iter().copied().filter(|c| !visited[c.index()]).collect();
        Self { candidates, next: 0 }
    }

    pub(crate) fn is_dead_end(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The next untried candidate.
    pub(crate) fn advance(&mut self) -> Option<CityId> {
        let city = self.candidates.get(self.next).copied();
        self.next += 1;
        city
    }
}

/// Drop the last city of `path` and mark it unvisited.
pub(crate) fn retreat(path: &mut Path, visited: &mut [bool]) {
    if path.len() > 1 {
        visited[path.end().index()] = false;
        path.truncate(path.len() - 1);
    }
}
