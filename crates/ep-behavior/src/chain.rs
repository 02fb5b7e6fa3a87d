//! First-handled-wins rule chain.

use tracing::trace;

use ep_core::{AgentId, SimRng};
use ep_field::Field;

use crate::{Action, BehaviorError, BehaviorModel, BehaviorResult, TickContext};

/// An ordered list of [`Action`] rules.
///
/// For each rule in turn: decide against the current world, apply the
/// decision's intents, and stop if the rule handled the turn.
#[derive(Clone, Debug)]
pub struct ActionChain {
    actions: Vec<Action>,
}

impl ActionChain {
    /// A chain with a custom order.  Rules may not repeat.
    pub fn new(actions: Vec<Action>) -> BehaviorResult<Self> {
        for (i, a) in actions.iter().enumerate() {
            if actions[..i].contains(a) {
                return Err(BehaviorError::Config(format!("action {} listed twice", a.name())));
            }
        }
        Ok(Self { actions })
    }

    /// Quarantine, then the three movement rules, then a random move.
    pub fn standard() -> Self {
        Self { actions: Action::ALL.to_vec() }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl Default for ActionChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl BehaviorModel for ActionChain {
    fn act<F: Field>(
        &self,
        agent: AgentId,
        ctx:   &mut TickContext<'_, F>,
        rng:   &mut SimRng,
    ) -> BehaviorResult<Option<Action>> {
        for &action in &self.actions {
            // Re-read each time: the previous rule's intents may have
            // changed the agent.
            let view = ctx.agents.agent(agent)?;
            let decision = action.decide(&view, &*ctx.field, &ctx.policy, rng);
            for intent in decision.intents {
                ctx.apply(agent, intent)?;
            }
            if decision.handled {
                trace!(%agent, action = action.name(), "handled");
                return Ok(Some(action));
            }
        }
        Ok(None)
    }
}
