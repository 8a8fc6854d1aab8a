//! Cities and the roads between them.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use wf_core::{CityId, Coord};

// ── City ──────────────────────────────────────────────────────────────────────

/// A node of the world graph.
///
/// Adjacency is kept twice: `dist_to` answers "how long is the road to X"
/// in O(1), `neighbours` preserves the order roads were laid in.  The
/// ascending-by-length ordering used by the greedy solver is computed on
/// first request and cached; laying a new road clears the cache.
#[derive(Clone, Debug)]
pub struct City {
    pub id:  CityId,
    pub pos: Coord,
    dist_to:    FxHashMap<CityId, f64>,
    neighbours: Vec<CityId>,
    sorted:     OnceLock<Vec<CityId>>,
}

impl City {
    pub fn new(id: CityId, pos: Coord) -> Self {
        Self {
            id,
            pos,
            dist_to:    FxHashMap::default(),
            neighbours: Vec::new(),
            sorted:     OnceLock::new(),
        }
    }

    /// Record a road to `other`.  Returns `false` (and changes nothing) if
    /// the two are already neighbours.
    pub(crate) fn connect(&mut self, other: CityId, dist: f64) -> bool {
        if self.dist_to.contains_key(&other) {
            return false;
        }
        self.dist_to.insert(other, dist);
        self.neighbours.push(other);
        self.sorted = OnceLock::new();
        true
    }

    /// Neighbours in the order their roads were laid.
    #[inline]
    pub fn neighbours(&self) -> &[CityId] {
        &self.neighbours
    }

    /// Neighbours ordered by ascending road length.  Equal lengths keep
    /// insertion order.
    pub fn sorted_neighbours(&self) -> &[CityId] {
        self.sorted.get_or_init(|| {
            let mut sorted = self.neighbours.clone();
            sorted.sort_by(|a, b| self.dist_to[a].total_cmp(&self.dist_to[b]));
            sorted
        })
    }

    /// Length of the road to `other`, if there is one.
    #[inline]
    pub fn distance_to(&self, other: CityId) -> Option<f64> {
        self.dist_to.get(&other).copied()
    }

    #[inline]
    pub fn is_adjacent(&self, other: CityId) -> bool {
        self.dist_to.contains_key(&other)
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// An undirected road registered in the world.
///
/// Redundant with the cities' own adjacency; kept for iteration and
/// reporting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Road {
    pub a:      CityId,
    pub b:      CityId,
    pub length: f64,
}

impl Road {
    /// The end of the road opposite `city`, or `None` if `city` is not an end.
    pub fn other(&self, city: CityId) -> Option<CityId> {
        if city == self.a {
            Some(self.b)
        } else if city == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}
