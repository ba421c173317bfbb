//! Network and loader error type.

use thiserror::Error;

use troon_core::{Line, StationId};

/// Errors produced while loading or validating a rail network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("duplicate station name {0:?}")]
    DuplicateStation(String),

    #[error("unknown station {0:?}")]
    UnknownStation(String),

    #[error("{0} not found in network")]
    StationNotFound(StationId),

    #[error("{line} line route needs at least 2 stations, got {got}")]
    RouteTooShort { line: Line, got: usize },

    #[error("{line} line has no track segment from {from:?} to {to:?}")]
    MissingSegment { line: Line, from: String, to: String },

    #[error("parse error: expected {expected}, found {found:?}")]
    Parse { expected: String, found: String },

    #[error("unexpected end of input: expected {0}")]
    UnexpectedEof(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
