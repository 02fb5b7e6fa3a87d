//! Infection probability and its application.

use tracing::trace;

use ep_agent::AgentStore;
use ep_core::{AgentId, EpResult, SimConfig, SimRng};

use crate::{ContactSnapshot, Exposure};

/// `1 − Π (1 − rᵢ)` over the infected neighbours, where `rᵢ` is
/// `infectivity`, reduced to `infectivity · (1 − mask_risk_reduction)` for a
/// masked neighbour.  No neighbours gives 0.
pub fn infection_probability<I>(infectivity: f64, mask_risk_reduction: f64, masked: I) -> f64
where
    I: IntoIterator<Item = bool>,
{
    let escape: f64 = masked
        .into_iter()
        .map(|is_masked| {
            let r = if is_masked { infectivity * (1.0 - mask_risk_reduction) } else { infectivity };
            1.0 - r
        })
        .product();
    1.0 - escape
}

/// The transmission parameters of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransmissionModel {
    pub infectivity:         f64,
    pub mask_risk_reduction: f64,
}

impl TransmissionModel {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            infectivity:         config.infectivity,
            mask_risk_reduction: config.mask_risk_reduction,
        }
    }

    pub fn probability(&self, exposure: &Exposure) -> f64 {
        infection_probability(
            self.infectivity,
            self.mask_risk_reduction,
            exposure.infected_neighbours.iter().copied(),
        )
    }

    /// One trial per exposure, in roster order.  Each consumes exactly one
    /// draw and succeeds iff `draw < P`.
    pub fn newly_infected(&self, snapshot: &ContactSnapshot, rng: &mut SimRng) -> Vec<AgentId> {
        snapshot
            .exposures()
            .iter()
            .filter(|exposure| {
                let p = self.probability(exposure);
                let hit = rng.trial(p);
                trace!(agent = %exposure.agent, p, hit, "transmission trial");
                hit
            })
            .map(|exposure| exposure.agent)
            .collect()
    }
}

/// Infect every listed agent that is still susceptible.  Returns how many
/// actually changed state.
pub fn infect_all<L: Copy>(agents: &mut AgentStore<L>, ids: &[AgentId]) -> EpResult<usize> {
    let mut infected = 0;
    for &id in ids {
        if agents.infect(id)? {
            infected += 1;
        }
    }
    Ok(infected)
}
