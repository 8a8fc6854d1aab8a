//! World-subsystem error type.

use thiserror::Error;

use wf_core::{CityId, CoreError};

/// Errors produced by `wf-world`.
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("{0} not found in world")]
    CityNotFound(CityId),

    #[error("cannot lay a road between {a} and {b}")]
    InvalidRoad { a: CityId, b: CityId },

    #[error("{to} is not a neighbour of {from}")]
    NotAdjacent { from: CityId, to: CityId },

    #[error("cannot merge paths ending at {left} and {right}")]
    PathMismatch { left: CityId, right: CityId },

    #[error("{what} id space exhausted at {len} entries")]
    IdOverflow { what: &'static str, len: usize },

    #[error("no connected world after {attempts} attempts")]
    Disconnected { attempts: u32 },

    #[error("{roads} roads can never connect {cities} cities")]
    Unconnectable { roads: usize, cities: usize },

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
