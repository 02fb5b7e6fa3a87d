use thiserror::Error;

use ep_core::{AgentId, EpError};
use ep_field::FieldError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    /// A move targeted a location held by another occupant.
    #[error("{agent} cannot move to occupied location {location}")]
    LocationOccupied { agent: AgentId, location: String },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Core(#[from] EpError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
