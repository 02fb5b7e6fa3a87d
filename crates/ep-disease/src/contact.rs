//! Per-tick exposure snapshot.

use ep_agent::AgentStore;
use ep_core::AgentId;
use ep_field::Field;

/// A susceptible agent with at least one infected agent next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Exposure {
    pub agent:  AgentId,
    /// One entry per adjacent infected agent: whether that neighbour is
    /// masked.  Never empty.
    pub infected_neighbours: Vec<bool>,
}

impl Exposure {
    pub fn infected_count(&self) -> usize {
        self.infected_neighbours.len()
    }
}

/// Immutable record of every exposure at the moment it was captured.
#[derive(Clone, Debug, Default)]
pub struct ContactSnapshot {
    exposures: Vec<Exposure>,
}

impl ContactSnapshot {
    /// Scan the roster in id order and record every susceptible agent with
    /// an infected agent neighbour.
    pub fn capture<F: Field>(field: &F, agents: &AgentStore<F::Location>) -> Self {
        let mut exposures = Vec::new();
        for id in agents.agent_ids() {
            let i = id.index();
            if !agents.state[i].is_susceptible() {
                continue;
            }
            let infected_neighbours: Vec<bool> = field
                .neighbour_agents(agents.location[i])
                .into_iter()
                .filter(|n| agents.contains(*n) && agents.state[n.index()].is_infected())
                .map(|n| agents.compliance[n.index()].masked)
                .collect();
            if !infected_neighbours.is_empty() {
                exposures.push(Exposure { agent: id, infected_neighbours });
            }
        }
        Self { exposures }
    }

    /// Exposures in roster order.
    pub fn exposures(&self) -> &[Exposure] {
        &self.exposures
    }

    /// Ids of the exposed agents, in roster order.
    pub fn contacts(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.exposures.iter().map(|e| e.agent)
    }

    pub fn is_exposed(&self, agent: AgentId) -> bool {
        self.exposures.iter().any(|e| e.agent == agent)
    }

    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }
}
