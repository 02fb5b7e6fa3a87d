//! A no-op behavior model.

use ep_core::{AgentId, SimRng};
use ep_field::Field;

use crate::{Action, BehaviorModel, BehaviorResult, TickContext};

/// A [`BehaviorModel`] under which no agent ever moves or quarantines.
///
/// Useful for disease-only runs and tests: infections still spread and
/// illness still progresses, but the spatial layout never changes.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn act<F: Field>(
        &self,
        _agent: AgentId,
        _ctx:   &mut TickContext<'_, F>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Option<Action>> {
        Ok(None)
    }
}
