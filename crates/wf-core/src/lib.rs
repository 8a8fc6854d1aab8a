//! `wf-core` — foundational types for the `wayfarer` workspace.
//!
//! This crate is a dependency of every other `wf-*` crate.  It has no `wf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `CityId`, `RoadId`                                      |
//! | [`geo`]      | `Coord`, Euclidean distance, coordinate bounds          |
//! | [`rng`]      | `WorldRng` (seeded world-generation RNG)                |
//! | [`config`]   | `WorldConfig`, `ConnectionStrategy`                     |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConnectionStrategy, WorldConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{COORD_MAX, COORD_MIN, Coord};
pub use ids::{CityId, RoadId};
pub use rng::WorldRng;
