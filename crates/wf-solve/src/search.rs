//! Shortest paths between two cities.
//!
//! # Pluggability
//!
//! Both searches implement [`PathFinder`].  [`BidirectionalSearch`] is the
//! one [`find_shortest_path`] uses; [`DijkstraSearch`] is the plain
//! single-source algorithm, kept as a reference.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use wf_core::CityId;
use wf_world::{Path, World};

use crate::SolveResult;
use crate::tour::check_city;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// A shortest-path algorithm.
pub trait PathFinder {
    /// Shortest path from `from` to `to`.
    ///
    /// Out-of-range cities are an error; `Ok(None)` means the two cities are
    /// not connected.  `from == to` gives the single-city path of length 0.
    fn find_path(&self, world: &World, from: CityId, to: CityId) -> SolveResult<Option<Path>>;
}

/// Shortest path from `from` to `to` via [`BidirectionalSearch`], with the
/// time spent recorded on the returned path.
pub fn find_shortest_path(world: &World, from: CityId, to: CityId) -> SolveResult<Option<Path>> {
    let t0 = Instant::now();
    let path = BidirectionalSearch.find_path(world, from, to)?;
    let elapsed = t0.elapsed();
    Ok(path.map(|p| p.with_elapsed(elapsed)))
}

// ── Heap key ──────────────────────────────────────────────────────────────────

/// Path length with a total order, so it can key a `BinaryHeap`.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Dist(f64);

impl Eq for Dist {}

impl Ord for Dist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Dist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of `(distance, city)`.  The `CityId` secondary key makes
/// tie-breaking deterministic.
type MinHeap = BinaryHeap<Reverse<(Dist, CityId)>>;

// ── BidirectionalSearch ───────────────────────────────────────────────────────

/// Two Dijkstra searches, one from each end, expanded in lockstep until they
/// provably cannot improve on the best meeting found.
///
/// Each round both sides settle their nearest unsettled city.  The search
/// stops once the best candidate is no longer than the sum of those two
/// distances (a side with nothing left counts as infinitely far).  Otherwise
/// each side relaxes its settled city's roads; whenever a neighbour is
/// already known to the other side, the two half-paths are merged into a
/// candidate and the shorter candidate is kept.
pub struct BidirectionalSearch;

/// One direction of the search.
struct Side {
    origin:    CityId,
    /// Best path found so far from `origin` to each city.
    best:      Vec<Option<Path>>,
    processed: Vec<bool>,
    heap:      MinHeap,
}

impl Side {
    fn new(city_count: usize, origin: CityId) -> Self {
        let mut best = vec![None; city_count];
        best[origin.index()] = Some(Path::new(origin));
        let mut heap = MinHeap::new();
        heap.push(Reverse((Dist(0.0), origin)));
        Self { origin, best, processed: vec![false; city_count], heap }
    }

    /// Settle and return the nearest unprocessed city with a known path.
    fn pop_nearest(&mut self) -> Option<(CityId, f64)> {
        while let Some(Reverse((Dist(d), city))) = self.heap.pop() {
            // Stale entries: the city was settled through a shorter entry.
            if self.processed[city.index()] {
                continue;
            }
            self.processed[city.index()] = true;
            return Some((city, d));
        }
        None
    }

    /// Offer every neighbour of `city` the path through `city`, keeping it
    /// only when strictly shorter than what the neighbour already has.
    fn relax(&mut self, world: &World, city: CityId) -> SolveResult<()> {
        let Some(base) = self.best[city.index()].clone() else {
            return Ok(());
        };
        for &next in world.city(city).neighbours() {
            if next == self.origin || self.processed[next.index()] {
                continue;
            }
            let candidate = base.extended(world, next)?;
            let improves = self.best[next.index()]
                .as_ref()
                .is_none_or(|known| candidate.distance() < known.distance());
            if improves {
                self.heap.push(Reverse((Dist(candidate.distance()), next)));
                self.best[next.index()] = Some(candidate);
            }
        }
        Ok(())
    }
}

impl BidirectionalSearch {
    /// After `city` relaxed its roads, try every neighbour known to both
    /// sides as a meeting point.
    fn meet(
        world: &World,
        forward: &Side,
        backward: &Side,
        city: CityId,
        best: &mut Option<Path>,
    ) -> SolveResult<()> {
        for &next in world.city(city).neighbours() {
            let (Some(head), Some(tail)) = (&forward.best[next.index()], &backward.best[next.index()]) else {
                continue;
            };
            let total = head.distance() + tail.distance();
            if best.as_ref().is_none_or(|b| total < b.distance()) {
                *best = Some(head.merge(world, tail)?);
            }
        }
        Ok(())
    }
}

impl PathFinder for BidirectionalSearch {
    fn find_path(&self, world: &World, from: CityId, to: CityId) -> SolveResult<Option<Path>> {
        check_city(world, from)?;
        check_city(world, to)?;
        if from == to {
            return Ok(Some(Path::new(from)));
        }

        let n = world.city_count();
        let mut forward = Side::new(n, from);
        let mut backward = Side::new(n, to);
        let mut best: Option<Path> = None;
        let mut rounds = 0usize;

        loop {
            let near_fwd = forward.pop_nearest();
            let near_bwd = backward.pop_nearest();
            if near_fwd.is_none() && near_bwd.is_none() {
                break;
            }
            rounds += 1;

            let bound = near_fwd.map_or(f64::INFINITY, |(_, d)| d)
                + near_bwd.map_or(f64::INFINITY, |(_, d)| d);
            if best.as_ref().is_some_and(|b| b.distance() <= bound) {
                break;
            }

            if let Some((city, _)) = near_fwd {
                forward.relax(world, city)?;
                Self::meet(world, &forward, &backward, city, &mut best)?;
            }
            if let Some((city, _)) = near_bwd {
                backward.relax(world, city)?;
                Self::meet(world, &forward, &backward, city, &mut best)?;
            }
        }

        match &best {
            Some(p) => log::debug!("bidirectional {from} → {to}: {:.3} after {rounds} rounds", p.distance()),
            None    => log::debug!("bidirectional {from} → {to}: no path after {rounds} rounds"),
        }
        Ok(best)
    }
}

// ── DijkstraSearch ────────────────────────────────────────────────────────────

/// Standard single-source Dijkstra, stopping when the target is settled.
pub struct DijkstraSearch;

impl PathFinder for DijkstraSearch {
    fn find_path(&self, world: &World, from: CityId, to: CityId) -> SolveResult<Option<Path>> {
        check_city(world, from)?;
        check_city(world, to)?;
        if from == to {
            return Ok(Some(Path::new(from)));
        }

        let n = world.city_count();
        // dist[v] = best known distance to v.
        let mut dist = vec![f64::INFINITY; n];
        // prev[v] = city that reached v; `None` for unreached cities and `from`.
        let mut prev: Vec<Option<CityId>> = vec![None; n];
        dist[from.index()] = 0.0;

        let mut heap = MinHeap::new();
        heap.push(Reverse((Dist(0.0), from)));

        while let Some(Reverse((Dist(cost), city))) = heap.pop() {
            if city == to {
                return Ok(Some(reconstruct(world, &prev, from, to)?));
            }
            // Skip stale heap entries.
            if cost > dist[city.index()] {
                continue;
            }
            let here = world.city(city);
            for &next in here.neighbours() {
                let Some(length) = here.distance_to(next) else { continue };
                let new_cost = cost + length;
                if new_cost < dist[next.index()] {
                    dist[next.index()] = new_cost;
                    prev[next.index()] = Some(city);
                    heap.push(Reverse((Dist(new_cost), next)));
                }
            }
        }
        Ok(None)
    }
}

fn reconstruct(world: &World, prev: &[Option<CityId>], from: CityId, to: CityId) -> SolveResult<Path> {
    let mut chain = vec![to];
    let mut cur = to;
    while let Some(p) = prev[cur.index()] {
        chain.push(p);
        cur = p;
    }
    debug_assert_eq!(cur, from);

    let mut path = Path::new(from);
    for &city in chain.iter().rev().skip(1) {
        path.extend(world, city)?;
    }
    Ok(path)
}
