//! The `BehaviorModel` trait: the extension point for agent behavior.

use ep_core::{AgentId, SimRng};
use ep_field::Field;

use crate::{Action, BehaviorResult, TickContext};

/// Pluggable agent behavior.
///
/// Called once per agent per tick, in roster order, after the agent's
/// illness has progressed and before new infections are applied.  The model
/// mutates the world only through [`TickContext::apply`], and draws only from
/// the shared run RNG, so a seeded run is reproducible.
///
/// # Example
///
/// ```rust,ignore
/// struct StayHome;
///
/// impl BehaviorModel for StayHome {
///     fn act<F: Field>(&self, _: AgentId, _: &mut TickContext<'_, F>, _: &mut SimRng)
///         -> BehaviorResult<Option<Action>>
///     {
///         Ok(None)
///     }
/// }
/// ```
pub trait BehaviorModel {
    /// Let `agent` take its turn.
    ///
    /// Returns the rule that handled the turn, or `None` if no rule did.
    fn act<F: Field>(
        &self,
        agent: AgentId,
        ctx:   &mut TickContext<'_, F>,
        rng:   &mut SimRng,
    ) -> BehaviorResult<Option<Action>>;
}
