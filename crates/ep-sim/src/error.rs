use thiserror::Error;

use ep_behavior::BehaviorError;
use ep_core::EpError;
use ep_field::FieldError;

#[derive(Debug, Error)]
pub enum SimError {
    /// `step`/`run` was called before the first `reset`.
    #[error("simulation has not been reset; call reset() before stepping")]
    NotInitialised,

    #[error(transparent)]
    Core(#[from] EpError),

    #[error("field error: {0}")]
    Field(#[from] FieldError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
