//! tour — generate a world, solve the closed tour with each solver, and run a
//! few shortest-path queries between random points.
//!
//! ```text
//! RUST_LOG=debug cargo run -p tour -- --cities 9 --fraction 0.6 --strategy nearest
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use wf_core::{ConnectionStrategy, WorldConfig, WorldRng};
use wf_solve::{SolverKind, SpanningTreeTour, find_shortest_path, solve_tour};
use wf_world::{Path, World};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "tour", about = "Closed tours and shortest paths over a random world", version)]
struct Args {
    /// Number of cities to scatter.
    #[arg(long, default_value_t = 8)]
    cities: usize,

    /// Road density in (0, 1].
    #[arg(long, default_value_t = 0.5)]
    fraction: f64,

    /// How roads are laid: `random` or `nearest`.
    #[arg(long, default_value_t = ConnectionStrategy::Random)]
    strategy: ConnectionStrategy,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give up after this many disconnected worlds.
    #[arg(long, default_value_t = WorldConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Tour solvers to run, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "bfs,dfs,mst,greedy")]
    solvers: Vec<SolverKind>,

    /// Shortest-path queries between random points snapped to cities.
    #[arg(long, default_value_t = 3)]
    queries: usize,
}

impl Args {
    fn world_config(&self) -> WorldConfig {
        WorldConfig {
            max_attempts: self.max_attempts,
            ..WorldConfig::new(self.cities, self.fraction, self.strategy).with_seed(self.seed)
        }
    }
}

fn describe(path: &Path) -> String {
    let ids: Vec<String> = path.cities().iter().map(|c| c.index().to_string()).collect();
    format!("{:>9.3}  [{}]", path.distance(), ids.join(" "))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = args.world_config();

    println!("=== tour — wayfarer ===");
    println!(
        "Cities: {}  |  Fraction: {}  |  Strategy: {}  |  Seed: {}",
        config.city_count, config.road_fraction, config.strategy, config.seed
    );
    println!();

    // 1. Build the world.
    let t0 = Instant::now();
    let world = World::generate(&config).context("generating world")?;
    println!(
        "World: {} cities, {} roads ({:.2?})",
        world.city_count(),
        world.road_count(),
        t0.elapsed()
    );
    let tree = world.spanning_tree();
    println!("Spanning tree: {} edges, length {:.3}", tree.edges().len(), tree.total_length());
    println!();

    // 2. Tours from city 0.
    let Some(start) = world.cities().first().map(|c| c.id) else {
        return Ok(());
    };
    println!("{:<7} {:>9}  {:>12}  cities", "solver", "length", "time");
    for &kind in &args.solvers {
        match solve_tour(&world, kind, start)? {
            Some(tour) => println!(
                "{:<7} {}  ({:.2?})",
                kind,
                describe(&tour),
                tour.elapsed().unwrap_or_default()
            ),
            None => println!("{kind:<7} no tour"),
        }
    }
    if let Some(walk) = SpanningTreeTour::closed_walk(&world, start)? {
        println!("{:<7} {}", "walk", describe(&walk));
    }
    println!();

    // 3. Shortest paths between random points.
    let mut rng = WorldRng::new(config.seed.wrapping_add(1));
    for _ in 0..args.queries {
        let (a, b) = (rng.sample_point(), rng.sample_point());
        let (Some(from), Some(to)) = (world.nearest_city(a), world.nearest_city(b)) else {
            continue;
        };
        match find_shortest_path(&world, from, to)? {
            Some(path) => println!(
                "{a} → {b}: {}  ({:.2?})",
                describe(&path),
                path.elapsed().unwrap_or_default()
            ),
            None => println!("{a} → {b}: unreachable"),
        }
    }

    log::info!("done in {:.2?}", t0.elapsed());
    Ok(())
}
