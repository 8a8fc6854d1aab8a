//! Random world generation.
//!
//! # Retry loop
//!
//! Randomly laid roads can leave a world disconnected, and every solver
//! assumes it is not.  [`generate`] therefore scatters a fresh set of cities,
//! lays roads, checks connectivity, and only commits a world that passes.
//! Failed attempts are discarded and regenerated from scratch, up to
//! `config.max_attempts` times.
//!
//! Success is probabilistic, not guaranteed: a fraction too low to ever
//! connect the cities would loop until the attempt limit.  The one case that
//! can be detected up front (the random strategy laying fewer than `N − 1`
//! roads) fails immediately with [`WorldError::Unconnectable`].

use wf_core::{CityId, ConnectionStrategy, WorldConfig, WorldRng};

use crate::world::{World, WorldBuilder};
use crate::{WorldError, WorldResult};

/// Generate a connected world, regenerating until the connectivity check
/// passes or the attempt limit is hit.
pub fn generate(config: &WorldConfig, rng: &mut WorldRng) -> WorldResult<World> {
    config.validate()?;

    let cities = config.city_count;
    if config.strategy == ConnectionStrategy::Random && config.random_road_count() + 1 < cities {
        return Err(WorldError::Unconnectable { roads: config.random_road_count(), cities });
    }

    for attempt in 1..=config.max_attempts {
        let world = generate_once(config, rng)?;
        if world.is_connected() {
            log::info!(
                "world ready: {} cities, {} roads ({} strategy, attempt {attempt})",
                world.city_count(),
                world.road_count(),
                config.strategy,
            );
            return Ok(world);
        }
        log::debug!("attempt {attempt}: world is disconnected, regenerating");
    }

    Err(WorldError::Disconnected { attempts: config.max_attempts })
}

/// One attempt: scatter cities and lay roads, with no connectivity check.
pub fn generate_once(config: &WorldConfig, rng: &mut WorldRng) -> WorldResult<World> {
    let mut b = scatter_cities(config.city_count, rng)?;
    match config.strategy {
        ConnectionStrategy::Random  => connect_random(&mut b, config.random_road_count(), rng)?,
        ConnectionStrategy::Nearest => connect_nearest(&mut b, config.nearest_target_degree())?,
    }
    Ok(b.build())
}

fn scatter_cities(count: usize, rng: &mut WorldRng) -> WorldResult<WorldBuilder> {
    let mut b = WorldBuilder::with_capacity(count, 0);
    for _ in 0..count {
        b.add_city(rng.sample_point())?;
    }
    Ok(b)
}

/// Lay `road_count` roads between city pairs drawn uniformly without
/// replacement from all unordered pairs.
pub fn connect_random(b: &mut WorldBuilder, road_count: usize, rng: &mut WorldRng) -> WorldResult<()> {
    let n = b.city_count() as u32;
    let pairs: Vec<(CityId, CityId)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (CityId(i), CityId(j))))
        .collect();

    for idx in rng.sample_indices(pairs.len(), road_count) {
        let (a, c) = pairs[idx];
        b.add_road(a, c)?;
    }
    Ok(())
}

/// Visit cities in id order and connect each one to its closest
/// not-yet-adjacent cities until it has `target_degree` neighbours or runs
/// out of candidates.
///
/// Candidates are ranked by exact squared distance; equal distances go to
/// the lower id.  Roads laid for earlier cities count toward later cities'
/// degree.
pub fn connect_nearest(b: &mut WorldBuilder, target_degree: usize) -> WorldResult<()> {
    let n = b.city_count() as u32;

    for i in 0..n {
        let city = CityId(i);
        let missing = target_degree.saturating_sub(b.degree(city));
        if missing == 0 {
            continue;
        }

        let pos = b.pos(city)?;
        let mut candidates = Vec::with_capacity(n as usize);
        for j in (0..n).map(CityId) {
            if j != city && !b.is_adjacent(city, j) {
                candidates.push((pos.distance_2(b.pos(j)?), j));
            }
        }
        candidates.sort_unstable();

        for &(_, other) in candidates.iter().take(missing) {
            b.add_road(city, other)?;
        }
    }
    Ok(())
}
