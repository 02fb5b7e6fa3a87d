//! Plain data row types collected by the record.

use ep_core::{SimConfig, SirState, Tick};
use ep_sim::PopulationCounts;

/// Run parameters, as written in the two leading header rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunHeader {
    pub seed:                   u64,
    pub agent_probability:      f64,
    pub agent_zero_probability: f64,
    pub infectivity:            f64,
    pub social_distancing:      bool,
    pub mask_mandate:           bool,
    pub quarantining:           bool,
    /// Topology name: `Grid`, `SmallWorld` or `ScaleFree`.
    pub field_type:             String,
}

impl RunHeader {
    pub const NAMES: [&'static str; 8] = [
        "Seed",
        "Agent Probability",
        "Agent 0 Probability",
        "Infectiousness",
        "Social Distancing",
        "Mask Mandate",
        "Quarantining",
        "Field type",
    ];

    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            seed:                   config.seed,
            agent_probability:      config.agent_probability,
            agent_zero_probability: config.agent_zero_probability,
            infectivity:            config.infectivity,
            social_distancing:      config.social_distancing,
            mask_mandate:           config.mask_mandate,
            quarantining:           config.quarantining,
            field_type:             config.topology.name().to_owned(),
        }
    }

    /// Values in [`NAMES`](Self::NAMES) order.
    pub fn values(&self) -> Vec<String> {
        vec![
            self.seed.to_string(),
            self.agent_probability.to_string(),
            self.agent_zero_probability.to_string(),
            self.infectivity.to_string(),
            self.social_distancing.to_string(),
            self.mask_mandate.to_string(),
            self.quarantining.to_string(),
            self.field_type.clone(),
        ]
    }
}

/// SIR counts at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRow {
    pub tick:        u64,
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl TickRow {
    pub fn new(tick: Tick, counts: &PopulationCounts) -> Self {
        Self {
            tick:        tick.0,
            susceptible: counts.susceptible,
            infected:    counts.infected,
            recovered:   counts.recovered,
        }
    }

    /// Column names of a data row.
    pub fn names() -> Vec<String> {
        SirState::ALL.iter().map(|s| s.name().to_owned()).collect()
    }

    /// The three counts as strings, in `Susceptible, Infected, Recovered`
    /// order.  The tick is implied by the row's position.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.susceptible.to_string(),
            self.infected.to_string(),
            self.recovered.to_string(),
        ]
    }
}
