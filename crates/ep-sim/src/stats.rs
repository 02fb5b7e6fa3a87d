//! Population statistics gathered from a field scan.

use std::fmt;

use ep_agent::AgentStore;
use ep_core::{Entity, SirState};
use ep_field::Field;

/// Occupant counts at one instant.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PopulationCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub obstacles:   usize,
}

impl PopulationCounts {
    pub fn agents(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    pub fn of(&self, state: SirState) -> usize {
        match state {
            SirState::Susceptible => self.susceptible,
            SirState::Infected    => self.infected,
            SirState::Recovered   => self.recovered,
        }
    }

    /// The epidemic can still change: somebody is infected.
    #[inline]
    pub fn is_viable(&self) -> bool {
        self.infected > 0
    }
}

impl fmt::Display for PopulationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Agent -> {}]", self.agents())?;
        for state in SirState::ALL {
            write!(f, " [{} -> {}]", state.name(), self.of(state))?;
        }
        write!(f, " [Obstacle -> {}]", self.obstacles)
    }
}

/// Cached [`PopulationCounts`] with a validity flag.
///
/// Anything that mutates the field or agent states must call
/// [`invalidate`](Self::invalidate); the next read rescans.
#[derive(Clone, Debug, Default)]
pub struct FieldStats {
    counts: PopulationCounts,
    valid:  bool,
}

impl FieldStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Current counts, rescanning `field` first if the cache is stale.
    pub fn counts<F: Field>(&mut self, field: &F, agents: &AgentStore<F::Location>) -> PopulationCounts {
        if !self.valid {
            self.recount(field, agents);
        }
        self.counts
    }

    pub fn is_viable<F: Field>(&mut self, field: &F, agents: &AgentStore<F::Location>) -> bool {
        self.counts(field, agents).is_viable()
    }

    fn recount<F: Field>(&mut self, field: &F, agents: &AgentStore<F::Location>) {
        let mut counts = PopulationCounts::default();
        for entity in field.entities() {
            match entity {
                Entity::Agent(id) => match agents.state.get(id.index()) {
                    Some(SirState::Susceptible) => counts.susceptible += 1,
                    Some(SirState::Infected)    => counts.infected += 1,
                    Some(SirState::Recovered)   => counts.recovered += 1,
                    None => {}
                },
                Entity::Obstacle => counts.obstacles += 1,
            }
        }
        self.counts = counts;
        self.valid = true;
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.counts.fmt(f)
    }
}
