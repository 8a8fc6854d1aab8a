//! `wf-solve` — closed tours and shortest paths over a [`wf_world::World`].
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`tour`]       | `SolverKind`, `TourSolver` trait, `solve_tour`            |
//! | [`exhaustive`] | `BreadthFirst`, `DepthFirst` (exact)                      |
//! | [`heuristic`]  | `SpanningTreeTour`, `Greedy`                              |
//! | [`search`]     | `PathFinder` trait, `BidirectionalSearch`, `DijkstraSearch` |
//! | [`error`]      | `SolveError`, `SolveResult<T>`                            |
//!
//! Solvers never mutate the world: they read its roads and build private
//! [`Path`](wf_world::Path) values.  "No tour" and "no path" are `Ok(None)`;
//! errors are reserved for bad input such as an out-of-range city id.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wf_core::{CityId, ConnectionStrategy, WorldConfig};
//! use wf_solve::{SolverKind, find_shortest_path, solve_tour};
//! use wf_world::World;
//!
//! let world = World::generate(&WorldConfig::new(8, 1.0, ConnectionStrategy::Random))?;
//! let tour = solve_tour(&world, SolverKind::Dfs, CityId(0))?;
//! let path = find_shortest_path(&world, CityId(0), CityId(5))?;
//! ```

pub mod error;
pub mod exhaustive;
pub mod heuristic;
pub mod search;
pub mod tour;


pub use error::{SolveError, SolveResult};
pub use exhaustive::{BreadthFirst, DepthFirst};
pub use heuristic::{Greedy, SpanningTreeTour};
pub use search::{BidirectionalSearch, DijkstraSearch, PathFinder, find_shortest_path};
pub use tour::{SolverKind, TourSolver, solve_tour};
