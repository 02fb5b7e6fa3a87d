//! Command-line arguments and config resolution.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ep_core::{SimConfig, Topology, ZoneTracking};

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run the spatial SIR epidemic simulator without a display")]
pub struct Args {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ticks to run (default: the config's runtime)
    #[arg(long, conflicts_with = "until_extinct")]
    pub steps: Option<u64>,

    /// Override the field topology
    #[arg(long, value_enum)]
    pub topology: Option<TopologyArg>,

    /// Turn the quarantining policy on
    #[arg(long)]
    pub quarantining: bool,

    /// Turn the social distancing policy on
    #[arg(long)]
    pub distancing: bool,

    /// Turn the mask mandate on
    #[arg(long)]
    pub masks: bool,

    /// Release quarantine zones as one flat set instead of per agent
    #[arg(long)]
    pub flat_zones: bool,

    /// Run until nobody is infected instead of for a fixed number of ticks
    #[arg(long)]
    pub until_extinct: bool,

    /// Print the record as JSON instead of comma-separated rows
    #[arg(long)]
    pub json: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    pub dump_default_config: bool,
}

#[derive(ValueEnum, Copy, Clone, PartialEq, Eq, Debug)]
pub enum TopologyArg {
    Grid,
    SmallWorld,
    ScaleFree,
}

impl TopologyArg {
    /// The topology to run, keeping `current`'s parameters if it is
    /// already of the requested kind.
    fn resolve(self, current: &Topology) -> Topology {
        match (self, current) {
            (TopologyArg::Grid, _) => Topology::Grid,
            (TopologyArg::SmallWorld, t @ Topology::SmallWorld { .. }) => t.clone(),
            (TopologyArg::SmallWorld, _) => Topology::small_world(),
            (TopologyArg::ScaleFree, t @ Topology::ScaleFree { .. }) => t.clone(),
            (TopologyArg::ScaleFree, _) => Topology::scale_free(),
        }
    }
}

impl Args {
    /// Load the config file (or defaults), apply overrides, validate.
    pub fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(topology) = self.topology {
            config.topology = topology.resolve(&config.topology);
        }
        config.quarantining |= self.quarantining;
        config.social_distancing |= self.distancing;
        config.mask_mandate |= self.masks;
        if self.flat_zones {
            config.zone_tracking = ZoneTracking::Flat;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Tick budget for a fixed-length run.
    pub fn tick_budget(&self, config: &SimConfig) -> u64 {
        self.steps.unwrap_or(config.runtime)
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
