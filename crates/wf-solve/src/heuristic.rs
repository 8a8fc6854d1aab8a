//! Fast, non-optimal tour solvers.

use wf_core::CityId;
use wf_world::{Path, World};

use crate::SolveResult;
use crate::tour::{Frame, TourSolver, check_city, close_tour, retreat};

// ── SpanningTreeTour ──────────────────────────────────────────────────────────

/// Tour built from the world's minimum spanning tree.
///
/// Walks the tree in preorder from the start city (children in the order
/// their tree edges were added) and joins consecutive preorder cities by
/// direct roads, which skips the return legs of a full double traversal.
/// In a complete world the result is at most twice the optimal length on
/// Euclidean distances.
///
/// On sparser worlds some pair of consecutive preorder cities may have no
/// road between them, or the last city no road home.  The solver then
/// returns the [`closed_walk`](Self::closed_walk) instead: every city is
/// still visited and the walk ends at the start, but cities repeat.  Only a
/// world the spanning tree does not cover gives `None`.
pub struct SpanningTreeTour;

impl SpanningTreeTour {
    /// Cities of the spanning tree in preorder from `start`.
    ///
    /// Empty when the tree does not reach `start`.
    pub fn preorder(world: &World, start: CityId) -> Vec<CityId> {
        let tree = world.spanning_tree();
        if !tree.contains(start) {
            return Vec::new();
        }
        let mut seen = vec![false; world.city_count()];
        let mut order = Vec::with_capacity(tree.len());
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if seen[id.index()] {
                continue;
            }
            seen[id.index()] = true;
            order.push(id);
            if let Some(node) = tree.node(id) {
                // Reversed so the first child is popped first.
                stack.extend(
                    node.neighbours()
                        .iter()
                        .rev()
                        .map(|&(child, _)| child)
                        .filter(|c| !seen[c.index()]),
                );
            }
        }
        order
    }

    /// The double traversal of the spanning tree: every tree edge is walked
    /// out to the child's subtree and back.
    ///
    /// The walk starts and ends at `start` and visits every city, but
    /// repeats cities, so it is not a tour.  `None` when the tree does not
    /// reach `start`.
    pub fn closed_walk(world: &World, start: CityId) -> SolveResult<Option<Path>> {
        let tree = world.spanning_tree();
        if !tree.contains(start) {
            return Ok(None);
        }
        let mut seen = vec![false; world.city_count()];
        seen[start.index()] = true;
        let mut walk = Path::new(start);
        // (tree node, index of the next tree neighbour to look at)
        let mut stack: Vec<(CityId, usize)> = vec![(start, 0)];

        while let Some(top) = stack.len().checked_sub(1) {
            let (id, next) = stack[top];
            match tree.node(id).and_then(|node| node.neighbours().get(next)) {
                Some(&(child, _)) => {
                    stack[top].1 += 1;
                    if !seen[child.index()] {
                        seen[child.index()] = true;
                        walk.extend(world, child)?;
                        stack.push((child, 0));
                    }
                }
                None => {
                    stack.pop();
                    if let Some(&(parent, _)) = stack.last() {
                        walk.extend(world, parent)?;
                    }
                }
            }
        }
        Ok(Some(walk))
    }

    /// The preorder joined by direct roads and closed to the start, if every
    /// one of those roads exists.
    fn shortcut_tour(world: &World, start: CityId) -> SolveResult<Option<Path>> {
        let order = Self::preorder(world, start);
        let mut path = Path::new(start);
        for &city in order.iter().skip(1) {
            if !world.city(path.end()).is_adjacent(city) {
                log::debug!("mst: no shortcut road {} → {city}", path.end());
                return Ok(None);
            }
            path.extend(world, city)?;
        }
        close_tour(world, &path)
    }
}

impl TourSolver for SpanningTreeTour {
    fn solve(&self, world: &World, start: CityId) -> SolveResult<Option<Path>> {
        check_city(world, start)?;
        if !world.spanning_tree().is_spanning() {
            log::debug!("mst: spanning tree does not cover the world");
            return Ok(None);
        }

        if let Some(tour) = Self::shortcut_tour(world, start)? {
            return Ok(Some(tour));
        }
        log::debug!("mst: falling back to the double traversal from {start}");
        // A lone city has no road to walk.
        Ok(Self::closed_walk(world, start)?.filter(|walk| walk.len() > 1))
    }
}

// ── Greedy ────────────────────────────────────────────────────────────────────

/// Nearest-neighbour tour with backtracking.
///
/// From each city, tries the unvisited neighbours closest first.  When a
/// choice leads to a dead end, or to a full path with no road home, the
/// search backs up and tries the next-closest alternative.  Returns the
/// first tour completed, which is usually short but not necessarily optimal.
pub struct Greedy;

impl TourSolver for Greedy {
    fn solve(&self, world: &World, start: CityId) -> SolveResult<Option<Path>> {
        check_city(world, start)?;
        let n = world.city_count();

        let mut path = Path::new(start);
        if n == 1 {
            return close_tour(world, &path);
        }
        let mut visited = vec![false; n];
        visited[start.index()] = true;

        let mut stack = vec![Frame::new(world.city(start).sorted_neighbours(), &visited)];
        let mut backtracks = 0usize;

        while let Some(frame) = stack.last_mut() {
            let Some(city) = frame.advance() else {
                stack.pop();
                retreat(&mut path, &mut visited);
                backtracks += 1;
                continue;
            };
            path.extend(world, city)?;
            visited[city.index()] = true;

            if path.len() == n {
                if let Some(tour) = close_tour(world, &path)? {
                    log::debug!("greedy: tour found after {backtracks} backtracks");
                    return Ok(Some(tour));
                }
                retreat(&mut path, &mut visited);
                continue;
            }

            let next = Frame::new(world.city(city).sorted_neighbours(), &visited);
            if next.is_dead_end() {
                retreat(&mut path, &mut visited);
                continue;
            }
            stack.push(next);
        }
        Ok(None)
    }
}
