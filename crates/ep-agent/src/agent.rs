//! A single agent's state as one value.
//!
//! [`AgentStore`](crate::AgentStore) keeps agents as parallel arrays; `Agent`
//! is the row type used to insert an agent and to hand a read-only copy of
//! one agent to the behavior rules.

use ep_core::SirState;

/// Per-agent behavioral traits, fixed at generation time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compliance {
    /// Prefers the least crowded free neighbour when moving.
    pub distancing:      bool,
    /// Reduces the infectivity this agent exerts on its neighbours.
    pub masked:          bool,
    /// Self-quarantines once infected, provided it is also symptomatic.
    pub will_quarantine: bool,
    pub symptomatic:     bool,
}

/// One agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent<L> {
    pub state:             SirState,
    /// Ticks of illness left.  Drawn once at creation and only decremented
    /// while the agent is infected.
    pub remaining_illness: u32,
    pub location:          L,
    pub compliance:        Compliance,
    /// Currently contributing to the quarantine zone.
    pub quarantining:      bool,
}

impl<L> Agent<L> {
    /// A susceptible agent.
    pub fn new(location: L, remaining_illness: u32, compliance: Compliance) -> Self {
        Self {
            state: SirState::Susceptible,
            remaining_illness,
            location,
            compliance,
            quarantining: false,
        }
    }

    /// A pre-infected agent with no compliance traits.
    pub fn patient_zero(location: L, remaining_illness: u32) -> Self {
        Self {
            state: SirState::Infected,
            ..Self::new(location, remaining_illness, Compliance::default())
        }
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state.is_infected()
    }

    /// Infected, symptomatic and willing to quarantine.
    #[inline]
    pub fn should_quarantine(&self) -> bool {
        self.state.is_infected() && self.compliance.symptomatic && self.compliance.will_quarantine
    }
}
