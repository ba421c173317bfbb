use thiserror::Error;

use troon_core::{CoreError, Line, StationId};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation configuration")]
    Config(#[from] CoreError),

    #[error("{0} line has no spawn segments")]
    NoSpawnPoint(Line),

    #[error("no track segment from {from} to {to}")]
    MissingLink { from: StationId, to: StationId },

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
