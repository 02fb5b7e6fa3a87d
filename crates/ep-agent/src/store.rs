//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let state = store.state[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Ids are handed out in insertion order, which is the field-population
//! order, and ascending id order is the roster order every tick follows.

use ep_core::{AgentId, EpError, EpResult, SirState};

use crate::{Agent, Compliance};

/// Structure-of-Arrays storage for all agent state.
pub struct AgentStore<L> {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Disease state ─────────────────────────────────────────────────────
    pub state: Vec<SirState>,

    /// Ticks of illness left.  Meaningless once the agent has recovered.
    pub remaining_illness: Vec<u32>,

    // ── Spatial state ─────────────────────────────────────────────────────
    /// Cached location.  Must always equal the field's record for the agent.
    pub location: Vec<L>,

    // ── Behavioral state ──────────────────────────────────────────────────
    pub compliance: Vec<Compliance>,

    pub quarantining: Vec<bool>,
}

impl<L: Copy> AgentStore<L> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            count:             0,
            state:             Vec::with_capacity(n),
            remaining_illness: Vec::with_capacity(n),
            location:          Vec::with_capacity(n),
            compliance:        Vec::with_capacity(n),
            quarantining:      Vec::with_capacity(n),
        }
    }

    /// Append an agent and return its id (sequential from 0).
    pub fn push(&mut self, agent: Agent<L>) -> AgentId {
        let id = AgentId(self.count as u32);
        self.state.push(agent.state);
        self.remaining_illness.push(agent.remaining_illness);
        self.location.push(agent.location);
        self.compliance.push(agent.compliance);
        self.quarantining.push(agent.quarantining);
        self.count += 1;
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in roster order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// A copy of one agent's state.
    pub fn agent(&self, agent: AgentId) -> EpResult<Agent<L>> {
        let i = self.index(agent)?;
        Ok(Agent {
            state:             self.state[i],
            remaining_illness: self.remaining_illness[i],
            location:          self.location[i],
            compliance:        self.compliance[i],
            quarantining:      self.quarantining[i],
        })
    }

    // ── Disease transitions ───────────────────────────────────────────────

    /// Move the agent to the next SIR compartment.
    ///
    /// Fails with [`EpError::IllegalTransition`] for a recovered agent.
    pub fn advance_state(&mut self, agent: AgentId) -> EpResult<SirState> {
        let i = self.index(agent)?;
        self.state[i] = self.state[i].try_next()?;
        Ok(self.state[i])
    }

    /// One tick of illness.  An infected agent loses a tick of remaining
    /// illness and recovers when none is left; other agents are untouched.
    /// Returns `true` if the agent recovered.
    pub fn progress_disease(&mut self, agent: AgentId) -> EpResult<bool> {
        let i = self.index(agent)?;
        if !self.state[i].is_infected() {
            return Ok(false);
        }
        self.remaining_illness[i] = self.remaining_illness[i].saturating_sub(1);
        if self.remaining_illness[i] == 0 {
            self.advance_state(agent)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Infect a susceptible agent.  Returns `false` (and changes nothing) for
    /// an agent that is no longer susceptible.
    pub fn infect(&mut self, agent: AgentId) -> EpResult<bool> {
        let i = self.index(agent)?;
        if !self.state[i].is_susceptible() {
            return Ok(false);
        }
        self.advance_state(agent)?;
        Ok(true)
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Agent counts per compartment, indexed like [`SirState::ALL`].
    pub fn state_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for s in &self.state {
            counts[*s as usize] += 1;
        }
        counts
    }

    #[inline]
    fn index(&self, agent: AgentId) -> EpResult<usize> {
        if self.contains(agent) {
            Ok(agent.index())
        } else {
            Err(EpError::AgentNotFound(agent))
        }
    }
}

impl<L: Copy> Default for AgentStore<L> {
    fn default() -> Self {
        Self::new()
    }
}
