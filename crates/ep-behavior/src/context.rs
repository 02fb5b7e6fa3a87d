//! The world an agent acts on during its turn.

use tracing::trace;

use ep_agent::AgentStore;
use ep_core::{AgentId, Entity, Policy, Tick, ZoneTracking};
use ep_field::Field;

use crate::{BehaviorError, BehaviorResult, Intent};

/// Mutable borrows of the field and the agent store for the action phase of
/// one tick, plus the read-only tick and policy.
///
/// Built once per tick by ep-sim and handed to the behavior model for every
/// agent in roster order.  All mutation goes through [`apply`](Self::apply),
/// which keeps each agent's cached location equal to the field's record.
pub struct TickContext<'a, F: Field> {
    pub tick:   Tick,
    pub policy: Policy,
    pub field:  &'a mut F,
    pub agents: &'a mut AgentStore<F::Location>,
}

impl<'a, F: Field> TickContext<'a, F> {
    #[inline]
    pub fn new(
        tick:   Tick,
        policy: Policy,
        field:  &'a mut F,
        agents: &'a mut AgentStore<F::Location>,
    ) -> Self {
        Self { tick, policy, field, agents }
    }

    /// Carry out one intent for `agent`.
    pub fn apply(&mut self, agent: AgentId, intent: Intent<F::Location>) -> BehaviorResult<()> {
        let current = self.agents.agent(agent)?;
        match intent {
            Intent::MoveTo(to) => {
                if to == current.location {
                    return Ok(());
                }
                if let Some(occupant) = self.field.object_at(to) {
                    if occupant != Entity::Agent(agent) {
                        return Err(BehaviorError::LocationOccupied {
                            agent,
                            location: format!("{to:?}"),
                        });
                    }
                }
                self.field.clear_location(current.location)?;
                self.field.place(to, Entity::Agent(agent))?;
                self.agents.location[agent.index()] = to;
                trace!(%agent, from = ?current.location, ?to, "moved");
            }
            Intent::BeginQuarantine(locations) => {
                match self.policy.zone_tracking {
                    ZoneTracking::PerContributor => self.field.register_zone_for(agent, &locations),
                    ZoneTracking::Flat           => self.field.register_zone(&locations),
                }
                self.agents.quarantining[agent.index()] = true;
                trace!(%agent, cells = locations.len(), "began quarantine");
            }
            Intent::EndQuarantine(locations) => {
                match self.policy.zone_tracking {
                    ZoneTracking::PerContributor => {
                        self.field.deregister_zone_for(agent);
                    }
                    ZoneTracking::Flat => self.field.deregister_zone(&locations),
                }
                self.agents.quarantining[agent.index()] = false;
                trace!(%agent, "ended quarantine");
            }
        }
        Ok(())
    }
}
