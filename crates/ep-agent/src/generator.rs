//! Random population generation.
//!
//! # Draw order
//!
//! For every location offered by the field, in the field's iteration order:
//!
//! 1. one uniform `v` in `[0, 1)`;
//! 2. `v ≤ p0`: a patient zero, then one draw for its illness duration;
//! 3. `p0 < v ≤ p0 + p1`: a regular agent, then one draw for its illness
//!    duration and one draw per enabled trait (distancing, mask, quarantine,
//!    symptomatic in that order).  A trait whose policy is off takes no draw;
//! 4. `p0 + p1 < v ≤ p0 + p1 + p_obstacle`: an obstacle, no further draws;
//! 5. otherwise the location stays empty.
//!
//! Changing this order changes every seeded run.

use tracing::info;

use ep_core::{Entity, SimConfig, SimRng};
use ep_field::{Field, FieldResult};

use crate::{Agent, AgentStore, Compliance};

/// What a location receives.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Spawn<L> {
    Agent(Agent<L>),
    Obstacle,
}

/// Samples occupants from the configured densities and compliance rates.
#[derive(Clone, Debug)]
pub struct AgentGenerator {
    agent_zero_probability: f64,
    agent_probability:      f64,
    obstacle_probability:   f64,
    social_distancing:      Option<f64>,
    mask_mandate:           Option<f64>,
    quarantine:             Option<(f64, f64)>,
    period_min:             u32,
    period_max:             u32,
}

impl AgentGenerator {
    /// Assumes `config` has passed `SimConfig::validate`.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            agent_zero_probability: config.agent_zero_probability,
            agent_probability:      config.agent_probability,
            obstacle_probability:   config.obstacle_probability,
            social_distancing:      config.social_distancing.then_some(config.social_distancing_compliance),
            mask_mandate:           config.mask_mandate.then_some(config.mask_compliance),
            quarantine:             config.quarantining.then_some((
                config.quarantine_compliance,
                config.symptomatic_probability,
            )),
            period_min:             config.infectious_period_min,
            period_max:             config.infectious_period_max,
        }
    }

    /// Decide what, if anything, occupies `location`.
    pub fn generate<L>(&self, location: L, rng: &mut SimRng) -> Option<Spawn<L>> {
        let v: f64 = rng.random();
        let p0 = self.agent_zero_probability;
        let p1 = p0 + self.agent_probability;

        if v <= p0 {
            let illness = self.illness_duration(rng);
            return Some(Spawn::Agent(Agent::patient_zero(location, illness)));
        }
        if v <= p1 {
            let illness = self.illness_duration(rng);
            let compliance = self.compliance(rng);
            return Some(Spawn::Agent(Agent::new(location, illness, compliance)));
        }
        if v <= p1 + self.obstacle_probability {
            return Some(Spawn::Obstacle);
        }
        None
    }

    /// Uniform in `[min, max)`; exactly `min` when the bounds are equal.
    pub fn illness_duration(&self, rng: &mut SimRng) -> u32 {
        if self.period_max > self.period_min {
            rng.gen_range(self.period_min..self.period_max)
        } else {
            self.period_min
        }
    }

    fn compliance(&self, rng: &mut SimRng) -> Compliance {
        let mut trait_draw = |rate: Option<f64>| rate.is_some_and(|p| rng.trial(p));

        let distancing = trait_draw(self.social_distancing);
        let masked     = trait_draw(self.mask_mandate);
        let will_quarantine = trait_draw(self.quarantine.map(|(compliance, _)| compliance));
        let symptomatic     = trait_draw(self.quarantine.map(|(_, symptomatic)| symptomatic));

        Compliance { distancing, masked, will_quarantine, symptomatic }
    }
}

/// Clear `field` and fill it with a freshly generated population.
///
/// Agents receive ids in the order the field offers locations, so the
/// returned store's roster order is the field's iteration order.
pub fn populate<F: Field>(
    field:  &mut F,
    config: &SimConfig,
    rng:    &mut SimRng,
) -> FieldResult<AgentStore<F::Location>> {
    let generator = AgentGenerator::new(config);
    let mut store = AgentStore::new();
    let mut obstacles = 0usize;

    field.initialise(|location| match generator.generate(location, rng)? {
        Spawn::Agent(agent) => Some(Entity::Agent(store.push(agent))),
        Spawn::Obstacle => {
            obstacles += 1;
            Some(Entity::Obstacle)
        }
    })?;

    let [s, i, r] = store.state_counts();
    info!(
        agents = store.len(),
        obstacles,
        susceptible = s,
        infected = i,
        recovered = r,
        "populated field"
    );
    Ok(store)
}
