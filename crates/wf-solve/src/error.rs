use thiserror::Error;

use wf_core::CityId;
use wf_world::WorldError;

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("{id} is out of range for a world of {city_count} cities")]
    CityOutOfRange { id: CityId, city_count: usize },

    #[error("unknown solver {0:?} (expected bfs, dfs, mst or greedy)")]
    UnknownSolver(String),

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type SolveResult<T> = Result<T, SolveError>;
