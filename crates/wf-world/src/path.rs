//! Adjacency-checked walks through the world.

use std::time::Duration;

use wf_core::CityId;

use crate::world::World;
use crate::{WorldError, WorldResult};

/// An ordered walk through the world plus its accumulated distance.
///
/// Every consecutive pair of cities is joined by a road; `extend` and
/// `merge` check this against the world passed in and fail otherwise.  The
/// path holds no reference to the world, so it can be cloned and returned
/// freely.
///
/// Distances are kept as running totals per position, which lets
/// [`truncate`](Self::truncate) step back without re-summing or
/// accumulating rounding error.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cities:     Vec<CityId>,
    /// `cumulative[i]` = distance from the start to `cities[i]`.
    cumulative: Vec<f64>,
    elapsed:    Option<Duration>,
}

impl Path {
    /// A single-city path of distance zero.
    pub fn new(start: CityId) -> Self {
        Self { cities: vec![start], cumulative: vec![0.0], elapsed: None }
    }

    #[inline]
    pub fn start(&self) -> CityId {
        self.cities[0]
    }

    #[inline]
    pub fn end(&self) -> CityId {
        self.cities[self.cities.len() - 1]
    }

    #[inline]
    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    /// Number of cities in the sequence (a repeated city counts twice).
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: a path holds at least its start city.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total length of the walk.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    pub fn contains(&self, id: CityId) -> bool {
        self.cities.contains(&id)
    }

    /// Wall-clock time spent computing this path, if recorded.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Append `next`, which must be a neighbour of the current end.
    pub fn extend(&mut self, world: &World, next: CityId) -> WorldResult<&mut Self> {
        let from = self.end();
        let length = world
            .road_length(from, next)
            .ok_or(WorldError::NotAdjacent { from, to: next })?;
        let total = self.distance() + length;
        self.cities.push(next);
        self.cumulative.push(total);
        Ok(self)
    }

    /// A copy extended by `next`.
    pub fn extended(&self, world: &World, next: CityId) -> WorldResult<Path> {
        let mut copy = self.clone();
        copy.extend(world, next)?;
        Ok(copy)
    }

    /// Shorten to the first `len` cities (never below one).
    pub fn truncate(&mut self, len: usize) {
        let len = len.max(1);
        self.cities.truncate(len);
        self.cumulative.truncate(len);
    }

    /// Join this path with `other`, both ending at the same city, into a walk
    /// from `self.start()` to `other.start()`.
    ///
    /// `other` is appended in reverse with the shared end city kept once.
    pub fn merge(&self, world: &World, other: &Path) -> WorldResult<Path> {
        if self.end() != other.end() {
            return Err(WorldError::PathMismatch { left: self.end(), right: other.end() });
        }
        let mut merged = self.clone();
        merged.elapsed = None;
        for &city in other.cities.iter().rev().skip(1) {
            merged.extend(world, city)?;
        }
        Ok(merged)
    }

    /// `true` for a closed walk that visits each of `city_count` cities
    /// exactly once before returning to its start.
    pub fn is_tour(&self, city_count: usize) -> bool {
        if self.cities.len() != city_count + 1 || self.start() != self.end() {
            return false;
        }
        let mut seen = vec![false; city_count];
        for id in &self.cities[..city_count] {
            match seen.get_mut(id.index()) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}
