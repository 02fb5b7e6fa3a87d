//! The decision rules, in priority order.

use ep_agent::Agent;
use ep_core::{EntityKind, Policy, SimRng};
use ep_field::{Field, first_outside_zone, rank_by_crowding};

use crate::{Decision, Intent};

/// One decision rule.  Rules only read; see [`Action::decide`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Infected, symptomatic, willing agents register their neighbourhood as
    /// a quarantine zone and stay put.  Agents that no longer qualify but
    /// are still quarantining release the zone and fall through.
    Quarantine,

    /// Distancing agents under a quarantining policy: least crowded free
    /// neighbour, preferring one outside the zone.
    MoveDistancedQuarantined,

    /// Any agent under a quarantining policy: random free neighbour,
    /// preferring one outside the zone.
    MoveQuarantined,

    /// Distancing agents: least crowded free neighbour.
    MoveDistanced,

    /// Random free neighbour.  The only rule that can fail to handle.
    MoveRandom,
}

impl Action {
    /// The standard priority order.
    pub const ALL: [Action; 5] = [
        Action::Quarantine,
        Action::MoveDistancedQuarantined,
        Action::MoveQuarantined,
        Action::MoveDistanced,
        Action::MoveRandom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Quarantine               => "quarantine",
            Action::MoveDistancedQuarantined => "move_distanced_quarantined",
            Action::MoveQuarantined          => "move_quarantined",
            Action::MoveDistanced            => "move_distanced",
            Action::MoveRandom               => "move_random",
        }
    }

    /// Evaluate this rule for `agent` against the current field.
    pub fn decide<F: Field>(
        self,
        agent:  &Agent<F::Location>,
        field:  &F,
        policy: &Policy,
        rng:    &mut SimRng,
    ) -> Decision<F::Location> {
        match self {
            Action::Quarantine               => quarantine(agent, field),
            Action::MoveDistancedQuarantined => move_distanced_quarantined(agent, field, policy),
            Action::MoveQuarantined          => move_quarantined(agent, field, policy, rng),
            Action::MoveDistanced            => move_distanced(agent, field),
            Action::MoveRandom               => move_random(agent, field, rng),
        }
    }
}

fn quarantine<F: Field>(agent: &Agent<F::Location>, field: &F) -> Decision<F::Location> {
    if agent.should_quarantine() {
        if agent.quarantining {
            return Decision::handled(Vec::new());
        }
        let zone = field.adjacent_locations(agent.location);
        return Decision::handled(vec![Intent::BeginQuarantine(zone)]);
    }
    if agent.quarantining {
        let zone = field.adjacent_locations(agent.location);
        return Decision::fall_through(vec![Intent::EndQuarantine(zone)]);
    }
    Decision::pass()
}

fn move_distanced_quarantined<F: Field>(
    agent:  &Agent<F::Location>,
    field:  &F,
    policy: &Policy,
) -> Decision<F::Location> {
    if !(policy.quarantining && agent.compliance.distancing) {
        return Decision::pass();
    }
    let ranked = least_crowded(agent, field);
    Decision::handled_move(first_outside_zone(field, &ranked))
}

fn move_quarantined<F: Field>(
    agent:  &Agent<F::Location>,
    field:  &F,
    policy: &Policy,
    rng:    &mut SimRng,
) -> Decision<F::Location> {
    if !policy.quarantining {
        return Decision::pass();
    }
    let mut free = field.free_adjacent_locations(agent.location);
    rng.shuffle(&mut free);
    Decision::handled_move(first_outside_zone(field, &free))
}

fn move_distanced<F: Field>(agent: &Agent<F::Location>, field: &F) -> Decision<F::Location> {
    if !agent.compliance.distancing {
        return Decision::pass();
    }
    Decision::handled_move(least_crowded(agent, field).first().copied())
}

fn move_random<F: Field>(
    agent: &Agent<F::Location>,
    field: &F,
    rng:   &mut SimRng,
) -> Decision<F::Location> {
    match field.free_adjacent_location(agent.location, rng) {
        Some(to) => Decision::handled(vec![Intent::MoveTo(to)]),
        None     => Decision::pass(),
    }
}

fn least_crowded<F: Field>(agent: &Agent<F::Location>, field: &F) -> Vec<F::Location> {
    rank_by_crowding(field, field.free_adjacent_locations(agent.location), EntityKind::Agent)
}
