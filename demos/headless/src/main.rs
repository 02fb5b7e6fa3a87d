//! headless: run one epidemic without a display and print its record.
//!
//! ```text
//! headless --seed 7 --quarantining --until-extinct
//! headless --config run.json --topology small-world --steps 200 --json
//! RUST_LOG=debug headless
//! ```
//!
//! Logs go to stderr; the record (three header rows, then one
//! `Susceptible,Infected,Recovered` row per tick) and a summary go to stdout.

mod cli;


use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ep_core::{FieldKind, SimConfig, SimRng};
use ep_field::{ContactNetwork, Field, Grid};
use ep_record::RecordObserver;
use ep_sim::SimBuilder;

use cli::Args;

/// Stream offset for the network generator, keeping its draws apart from
/// the run RNG seeded with the same value.
const NETWORK_STREAM: u64 = 1;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if args.dump_default_config {
        println!("{}", serde_json::to_string_pretty(&SimConfig::default())?);
        return Ok(());
    }

    let config = args.resolve_config()?;
    info!(seed = config.seed, topology = config.topology.name(), "configuration loaded");

    match config.topology.field_kind() {
        FieldKind::Grid => {
            let grid = Grid::new(config.depth, config.width);
            run(config, grid, &args)
        }
        FieldKind::Network => {
            let mut rng = SimRng::new(config.seed).child(NETWORK_STREAM);
            let network = ContactNetwork::from_topology(&config.topology, &mut rng)?;
            info!(nodes = network.node_count(), links = network.link_count(), "contact network built");
            run(config, network, &args)
        }
    }
}

fn run<F: Field>(config: SimConfig, field: F, args: &Args) -> Result<()> {
    let budget = args.tick_budget(&config);
    let mut sim = SimBuilder::new(config, field).build()?;
    let mut obs = RecordObserver::new();

    sim.reset(&mut obs)?;
    let ran = if args.until_extinct {
        sim.run(&mut obs)?
    } else {
        sim.run_ticks(budget, &mut obs)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(obs.record())?);
    } else {
        for row in obs.record().full_record() {
            println!("{}", row.join(","));
        }
    }

    let status = if sim.is_finished() { "epidemic over" } else { "still spreading" };
    println!();
    println!("Ticks run:  {ran}");
    println!("Population: {}", sim.population());
    println!("Status:     {status}");
    Ok(())
}
