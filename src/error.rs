//! Error types for grid routing.

use crate::grid_world::Position;
use thiserror::Error;

/// Caller-input errors. Both variants indicate malformed input that the
/// caller must fix; an unreachable goal set is not an error and is reported
/// through [SearchResult](crate::SearchResult) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid search start {0}: out of bounds or blocked")]
    InvalidStart(Position),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
