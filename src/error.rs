//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnnealError>;

/// Errors raised before the annealing loop starts.
///
/// The loop itself is total: once a problem and a configuration have been
/// accepted, every iteration succeeds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnnealError {
    /// The point list handed to a tour or problem was unusable (empty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
