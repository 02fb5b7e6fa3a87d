//! SIR compartments.

use std::fmt;

use crate::{EpError, EpResult};

/// The epidemiological compartment of an agent.
///
/// Transitions only move forward (`Susceptible → Infected → Recovered`).
/// `Recovered` is terminal: [`next`](Self::next) returns `None` for it rather
/// than inventing a fourth state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SirState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl SirState {
    /// All compartments in their natural order.
    pub const ALL: [SirState; 3] = [
        SirState::Susceptible,
        SirState::Infected,
        SirState::Recovered,
    ];

    /// The successor compartment, or `None` for `Recovered`.
    #[inline]
    pub fn next(self) -> Option<SirState> {
        match self {
            SirState::Susceptible => Some(SirState::Infected),
            SirState::Infected    => Some(SirState::Recovered),
            SirState::Recovered   => None,
        }
    }

    /// The predecessor compartment, or `None` for `Susceptible`.
    #[inline]
    pub fn prev(self) -> Option<SirState> {
        match self {
            SirState::Susceptible => None,
            SirState::Infected    => Some(SirState::Susceptible),
            SirState::Recovered   => Some(SirState::Infected),
        }
    }

    /// Like [`next`](Self::next), but a missing successor is an
    /// [`EpError::IllegalTransition`].
    pub fn try_next(self) -> EpResult<SirState> {
        self.next().ok_or(EpError::IllegalTransition { from: self, direction: "forward" })
    }

    /// Like [`prev`](Self::prev), but a missing predecessor is an
    /// [`EpError::IllegalTransition`].
    pub fn try_prev(self) -> EpResult<SirState> {
        self.prev().ok_or(EpError::IllegalTransition { from: self, direction: "backward" })
    }

    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == SirState::Susceptible
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        self == SirState::Infected
    }

    /// Full compartment name, used for record headers and population summaries.
    pub fn name(self) -> &'static str {
        match self {
            SirState::Susceptible => "Susceptible",
            SirState::Infected    => "Infected",
            SirState::Recovered   => "Recovered",
        }
    }
}

impl fmt::Display for SirState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SirState::Susceptible => "S",
            SirState::Infected    => "I",
            SirState::Recovered   => "R",
        };
        f.write_str(label)
    }
}
