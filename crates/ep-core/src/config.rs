//! Run configuration.
//!
//! A `SimConfig` is built once per run (typically deserialized from JSON by
//! the application crate), validated with [`SimConfig::validate`] before any
//! field is constructed, and then passed by reference to every component that
//! needs it.  Nothing in the engine mutates it.

use crate::{EpError, EpResult};

// ── FieldKind ─────────────────────────────────────────────────────────────────

/// The two field implementations a topology can be realised on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Toroidal 2-D grid.
    Grid,
    /// Graph of nodes with direct-neighbour adjacency.
    Network,
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// Which topology the run uses, with the generator parameters for graph
/// topologies.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Topology {
    /// `depth × width` torus taken from [`SimConfig`].
    #[default]
    Grid,

    /// Kleinberg small world: a `lattice_size × lattice_size` torus lattice
    /// where every node also gets one long-range link, chosen with
    /// probability proportional to `distance^-clustering`.
    SmallWorld {
        lattice_size: usize,
        clustering:   f64,
    },

    /// Barabási–Albert preferential attachment: a fully connected seed of
    /// `initial_nodes`, grown to `total_nodes` with `edges_per_node` links
    /// per new node.
    ScaleFree {
        initial_nodes:  usize,
        edges_per_node: usize,
        total_nodes:    usize,
    },
}

impl Topology {
    /// The field implementation this topology must be realised on.
    pub fn field_kind(&self) -> FieldKind {
        match self {
            Topology::Grid => FieldKind::Grid,
            Topology::SmallWorld { .. } | Topology::ScaleFree { .. } => FieldKind::Network,
        }
    }

    /// Name written into the record header.
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Grid               => "Grid",
            Topology::SmallWorld { .. }  => "SmallWorld",
            Topology::ScaleFree { .. }   => "ScaleFree",
        }
    }

    /// Default small world: 12 × 12 lattice, clustering exponent 0.5.
    pub fn small_world() -> Self {
        Topology::SmallWorld { lattice_size: 12, clustering: 0.5 }
    }

    /// Default scale-free network: 4 seed nodes grown to 200 with 2 links each.
    pub fn scale_free() -> Self {
        Topology::ScaleFree { initial_nodes: 4, edges_per_node: 2, total_nodes: 200 }
    }

    fn validate(&self) -> EpResult<()> {
        match *self {
            Topology::Grid => Ok(()),
            Topology::SmallWorld { lattice_size, clustering } => {
                if lattice_size < 2 {
                    return Err(EpError::Config(format!(
                        "small-world lattice size must be at least 2, got {lattice_size}"
                    )));
                }
                if !clustering.is_finite() || clustering < 0.0 {
                    return Err(EpError::Config(format!(
                        "small-world clustering exponent must be finite and non-negative, got {clustering}"
                    )));
                }
                Ok(())
            }
            Topology::ScaleFree { initial_nodes, edges_per_node, total_nodes } => {
                if initial_nodes == 0 || edges_per_node == 0 {
                    return Err(EpError::Config(
                        "scale-free initial nodes and edges per node must be at least 1".into(),
                    ));
                }
                if edges_per_node > initial_nodes {
                    return Err(EpError::Config(format!(
                        "scale-free edges per node ({edges_per_node}) cannot exceed initial nodes ({initial_nodes})"
                    )));
                }
                if total_nodes < initial_nodes {
                    return Err(EpError::Config(format!(
                        "scale-free total nodes ({total_nodes}) cannot be less than initial nodes ({initial_nodes})"
                    )));
                }
                Ok(())
            }
        }
    }
}

// ── ZoneTracking ──────────────────────────────────────────────────────────────

/// How quarantine-zone contributions are released when an agent stops
/// quarantining.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoneTracking {
    /// Each agent's contributed locations are reference counted; releasing
    /// one contribution never removes a location another quarantining agent
    /// still contributes.
    #[default]
    PerContributor,

    /// One flat set.  A departing agent removes its recomputed adjacency set,
    /// which can erase locations an overlapping neighbour still needs.
    Flat,
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// The globally active interventions, as consulted by the behavior chain.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Policy {
    pub social_distancing: bool,
    pub mask_mandate:      bool,
    pub quarantining:      bool,
    pub zone_tracking:     ZoneTracking,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Defaults reproduce the reference parameter set (20 × 20 grid, seed 999,
/// 5 % agent density, 1 % patient-zero density, infectivity 0.33).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid rows.  Ignored by network topologies.
    pub depth: usize,

    /// Grid columns.  Ignored by network topologies.
    pub width: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks an application runs for when it uses a fixed run length.
    pub runtime: u64,

    /// Probability that a location receives a regular (susceptible) agent.
    pub agent_probability: f64,

    /// Probability that a location receives a pre-infected patient zero.
    pub agent_zero_probability: f64,

    /// Probability that a location receives an obstacle.
    pub obstacle_probability: f64,

    /// Per-neighbour, per-tick transmission probability.
    pub infectivity: f64,

    pub social_distancing: bool,
    pub mask_mandate:      bool,
    pub quarantining:      bool,

    /// Share of agents that distance when `social_distancing` is on.
    pub social_distancing_compliance: f64,

    /// Share of agents that wear masks when `mask_mandate` is on.
    pub mask_compliance: f64,

    /// Share of agents that self-quarantine when `quarantining` is on.
    pub quarantine_compliance: f64,

    /// Share of agents that show symptoms once infected.
    pub symptomatic_probability: f64,

    /// Fractional reduction of a masked infected neighbour's infectivity.
    pub mask_risk_reduction: f64,

    /// Lower bound (inclusive) of the illness duration in ticks.
    pub infectious_period_min: u32,

    /// Upper bound (exclusive) of the illness duration in ticks.  Equal
    /// bounds give every agent exactly `infectious_period_min`.
    pub infectious_period_max: u32,

    pub zone_tracking: ZoneTracking,

    pub topology: Topology,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth:                        20,
            width:                        20,
            seed:                         999,
            runtime:                      100,
            agent_probability:            0.05,
            agent_zero_probability:       0.01,
            obstacle_probability:         0.0,
            infectivity:                  0.33,
            social_distancing:            false,
            mask_mandate:                 false,
            quarantining:                 false,
            social_distancing_compliance: 0.5,
            mask_compliance:              0.9,
            quarantine_compliance:        0.8,
            symptomatic_probability:      0.33,
            mask_risk_reduction:          0.8,
            infectious_period_min:        14,
            infectious_period_max:        42,
            zone_tracking:                ZoneTracking::PerContributor,
            topology:                     Topology::Grid,
        }
    }
}

impl SimConfig {
    /// Reject any value the engine cannot run with.
    ///
    /// Values are never clamped: the first offending parameter is reported.
    pub fn validate(&self) -> EpResult<()> {
        if self.depth == 0 || self.width == 0 {
            return Err(EpError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.depth, self.width
            )));
        }
        if self.runtime == 0 {
            return Err(EpError::Config("runtime must be at least 1 tick".into()));
        }

        let probabilities = [
            ("agent probability",            self.agent_probability),
            ("agent zero probability",       self.agent_zero_probability),
            ("obstacle probability",         self.obstacle_probability),
            ("infectivity",                  self.infectivity),
            ("social distancing compliance", self.social_distancing_compliance),
            ("mask compliance",              self.mask_compliance),
            ("quarantine compliance",        self.quarantine_compliance),
            ("symptomatic probability",      self.symptomatic_probability),
            ("mask risk reduction",          self.mask_risk_reduction),
        ];
        for (name, p) in probabilities {
            check_probability(name, p)?;
        }

        if self.infectious_period_min == 0 || self.infectious_period_max == 0 {
            return Err(EpError::Config("infectious period bounds must be at least 1".into()));
        }
        if self.infectious_period_min > self.infectious_period_max {
            return Err(EpError::Config(format!(
                "infectious period min ({}) exceeds max ({})",
                self.infectious_period_min, self.infectious_period_max
            )));
        }

        self.topology.validate()
    }

    /// The intervention flags the behavior chain consults.
    pub fn policy(&self) -> Policy {
        Policy {
            social_distancing: self.social_distancing,
            mask_mandate:      self.mask_mandate,
            quarantining:      self.quarantining,
            zone_tracking:     self.zone_tracking,
        }
    }
}

fn check_probability(name: &str, p: f64) -> EpResult<()> {
    // `contains` is false for NaN, so NaN is rejected too.
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EpError::Config(format!("{name} must be between 0 and 1 inclusive, got {p}")))
    }
}
