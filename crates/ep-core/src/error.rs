//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EpError` as one variant
//! via `#[from]`, so configuration and state-machine failures propagate with
//! `?` all the way up to the simulation runner.

use thiserror::Error;

use crate::{AgentId, FieldKind, SirState};

/// The top-level error type for `ep-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    /// A transition was requested that the SIR state machine does not have
    /// (the successor of `Recovered` or the predecessor of `Susceptible`).
    /// Indicates a defect in transition ordering, not a runtime condition.
    #[error("illegal SIR transition {direction} from {from:?}")]
    IllegalTransition {
        from:      SirState,
        direction: &'static str,
    },

    #[error("topology {configured} requires a {expected:?} field, got {got:?}")]
    TopologyMismatch {
        configured: &'static str,
        expected:   FieldKind,
        got:        FieldKind,
    },
}

/// Shorthand result type for all `ep-*` crates.
pub type EpResult<T> = Result<T, EpError>;
