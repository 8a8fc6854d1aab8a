//! Exact tour solvers.
//!
//! Both enumerate every simple path from the start city, so their cost grows
//! factorially with city count.  They are meant for small worlds (a dozen
//! cities or so) and as ground truth for the heuristics.

use wf_core::CityId;
use wf_world::{Path, World};

use crate::SolveResult;
use crate::tour::{Frame, TourSolver, check_city, close_tour, retreat, shorter};

/// Above this many cities the exhaustive solvers log a warning before
/// starting.
pub const EXHAUSTIVE_WARN_CITIES: usize = 10;

fn warn_if_large(name: &str, world: &World) {
    if world.city_count() > EXHAUSTIVE_WARN_CITIES {
        log::warn!(
            "{name}: exhaustive search over {} cities may take very long",
            world.city_count()
        );
    }
}

// ── BreadthFirst ──────────────────────────────────────────────────────────────

/// Exhaustive breadth-first enumeration.
///
/// Keeps every partial path of the current length, extends each by every
/// unvisited neighbour of its end, and repeats until the paths cover all
/// cities.  The shortest of those that can close back to the start wins
/// (the first found on exact ties).
///
/// Holds a whole level of partial paths in memory at once; prefer
/// [`DepthFirst`] for anything but tiny worlds.
pub struct BreadthFirst;

impl TourSolver for BreadthFirst {
    fn solve(&self, world: &World, start: CityId) -> SolveResult<Option<Path>> {
        check_city(world, start)?;
        warn_if_large("bfs", world);
        let n = world.city_count();

        let mut level = vec![Path::new(start)];
        for depth in 1..n {
            let mut next = Vec::new();
            for path in &level {
                for &city in world.city(path.end()).neighbours() {
                    if !path.contains(city) {
                        next.push(path.extended(world, city)?);
                    }
                }
            }
            if next.is_empty() {
                log::debug!("bfs: no simple path reaches depth {depth}");
                return Ok(None);
            }
            level = next;
        }

        let mut best = None;
        for path in &level {
            if let Some(tour) = close_tour(world, path)? {
                best = shorter(best, tour);
            }
        }
        Ok(best)
    }
}

// ── DepthFirst ────────────────────────────────────────────────────────────────

/// Exhaustive depth-first search with pruning.
///
/// Extends one path at a time, backtracking on an explicit stack.  A branch
/// is cut as soon as its end has no unvisited neighbour, or once its length
/// already reaches the best tour found so far.  A completed tour replaces
/// the best only when strictly shorter.
pub struct DepthFirst;

impl TourSolver for DepthFirst {
    fn solve(&self, world: &World, start: CityId) -> SolveResult<Option<Path>> {
        check_city(world, start)?;
        warn_if_large("dfs", world);
        let n = world.city_count();

        let mut path = Path::new(start);
        if n == 1 {
            return close_tour(world, &path);
        }
        let mut visited = vec![false; n];
        visited[start.index()] = true;

        let mut best: Option<Path> = None;
        let mut stack = vec![Frame::new(world.city(start).neighbours(), &visited)];

        while let Some(frame) = stack.last_mut() {
            let Some(city) = frame.advance() else {
                stack.pop();
                retreat(&mut path, &mut visited);
                continue;
            };
            path.extend(world, city)?;
            visited[city.index()] = true;

            if best.as_ref().is_some_and(|b| path.distance() >= b.distance()) {
                retreat(&mut path, &mut visited);
                continue;
            }

            if path.len() == n {
                if let Some(tour) = close_tour(world, &path)? {
                    best = shorter(best, tour);
                }
                retreat(&mut path, &mut visited);
                continue;
            }

            let next = Frame::new(world.city(city).neighbours(), &visited);
            if next.is_dead_end() {
                retreat(&mut path, &mut visited);
                continue;
            }
            stack.push(next);
        }
        Ok(best)
    }
}
