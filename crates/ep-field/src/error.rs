//! Field-subsystem error type.

use thiserror::Error;

use ep_core::EpError;

/// Errors produced by `ep-field`.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A write addressed a location the field does not have.  The location
    /// is carried in its `Debug` form so the error stays non-generic.
    #[error("location {0} is outside the field")]
    LocationOutOfBounds(String),

    #[error("network construction failed: {0}")]
    NetworkBuild(String),

    #[error(transparent)]
    Core(#[from] EpError),
}

pub type FieldResult<T> = Result<T, FieldError>;
