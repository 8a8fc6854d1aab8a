//! Deterministic world-generation RNG.
//!
//! Every random decision made while building a world (city coordinates,
//! which pairs get a road) is drawn from one `WorldRng`.  Seeding it from a
//! `u64` makes a world fully reproducible: the same `WorldConfig` always
//! yields the same cities and roads, including across regeneration retries,
//! because retries keep drawing from the same stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::geo::{COORD_MAX, COORD_MIN, Coord};

/// Seeded RNG used for world generation.
///
/// Used only in single-threaded contexts; the type is not `Sync`.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// A single coordinate drawn uniformly from `COORD_MIN..=COORD_MAX`.
    #[inline]
    pub fn sample_coord(&mut self) -> i32 {
        self.0.gen_range(COORD_MIN..=COORD_MAX)
    }

    /// A point with both axes drawn by [`sample_coord`](Self::sample_coord).
    #[inline]
    pub fn sample_point(&mut self) -> Coord {
        let x = self.sample_coord();
        let y = self.sample_coord();
        Coord::new(x, y)
    }

    /// Draw `amount` distinct indices from `0..len` without replacement, in
    /// random order.
    ///
    /// `amount` is clamped to `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}
