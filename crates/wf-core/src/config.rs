//! World-generation configuration.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── ConnectionStrategy ────────────────────────────────────────────────────────

/// How roads are laid between cities when a world is generated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectionStrategy {
    /// Draw `ceil(fraction × pairs)` city pairs uniformly without replacement.
    #[default]
    Random,
    /// Connect every city to its closest cities until it has
    /// `ceil(fraction × (N − 1))` neighbours.
    Nearest,
}

impl ConnectionStrategy {
    pub const ALL: [ConnectionStrategy; 2] = [ConnectionStrategy::Random, ConnectionStrategy::Nearest];

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStrategy::Random  => "random",
            ConnectionStrategy::Nearest => "nearest",
        }
    }
}

impl fmt::Display for ConnectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        ConnectionStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownStrategy(s.to_owned()))
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Parameters for generating a world.
///
/// `road_fraction` means slightly different things per strategy: the fraction
/// of all city pairs for [`ConnectionStrategy::Random`], the fraction of the
/// maximum per-city degree for [`ConnectionStrategy::Nearest`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Number of cities.  Must be positive.
    pub city_count: usize,
    /// Fraction of roads to lay, in `(0, 1]`.
    pub road_fraction: f64,
    pub strategy: ConnectionStrategy,
    /// Seed for the world-generation RNG.
    pub seed: u64,
    /// Upper bound on regeneration attempts before giving up on a
    /// connected world.
    pub max_attempts: u32,
}

impl WorldConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

    pub fn new(city_count: usize, road_fraction: f64, strategy: ConnectionStrategy) -> Self {
        Self { city_count, road_fraction, strategy, ..Self::default() }
    }

    /// Replace the seed, keeping every other field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> CoreResult<()> {
        if self.city_count == 0 {
            return Err(CoreError::InvalidCityCount(self.city_count));
        }
        // NaN fails both comparisons and is rejected here too.
        if !(self.road_fraction > 0.0 && self.road_fraction <= 1.0) {
            return Err(CoreError::InvalidFraction(self.road_fraction));
        }
        if self.max_attempts == 0 {
            return Err(CoreError::InvalidMaxAttempts);
        }
        Ok(())
    }

    /// Number of unordered city pairs, `N (N − 1) / 2`.
    pub fn pair_count(&self) -> usize {
        self.city_count * self.city_count.saturating_sub(1) / 2
    }

    /// Roads the random strategy lays: `ceil(fraction × pairs)`.
    pub fn random_road_count(&self) -> usize {
        (self.road_fraction * self.pair_count() as f64).ceil() as usize
    }

    /// Per-city degree the nearest strategy aims for: `ceil(fraction × (N − 1))`.
    pub fn nearest_target_degree(&self) -> usize {
        (self.road_fraction * self.city_count.saturating_sub(1) as f64).ceil() as usize
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            city_count:    50,
            road_fraction: 0.1,
            strategy:      ConnectionStrategy::Random,
            seed:          42,
            max_attempts:  Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
