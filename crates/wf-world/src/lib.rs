//! `wf-world` — cities, roads, paths, and the spanning tree over them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`city`]     | `City` (adjacency + cached sorted neighbours), `Road`       |
//! | [`path`]     | `Path`, an adjacency-checked walk with accumulated distance |
//! | [`world`]    | `World` (cities + road registry + R-tree), `WorldBuilder`   |
//! | [`generate`] | Random / nearest road laying and the regeneration loop      |
//! | [`mst`]      | `SpanningTree` built with Prim's algorithm                  |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `wf-core` value types.  |

pub mod city;
pub mod error;
pub mod generate;
pub mod mst;
pub mod path;
pub mod world;

#[cfg(test)]
mod tests;

pub use city::{City, Road};
pub use error::{WorldError, WorldResult};
pub use mst::{SpanningTree, TreeEdge, TreeNode};
pub use path::Path;
pub use world::{World, WorldBuilder};
