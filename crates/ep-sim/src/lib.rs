//! `ep-sim`: tick loop orchestrator for the epidemic simulator.
//!
//! # Tick loop
//!
//! ```text
//! reset:
//!   seed the run RNG from config.seed, clear and repopulate the field,
//!   record the initial population (tick 0).
//!
//! step (while someone is infected):
//!   ① Contacts:   snapshot every agent with an infected neighbour and the
//!                  mask flags of those neighbours.
//!   ② Trials:     one Bernoulli draw per exposed agent, roster order;
//!                  hits are held back until ④.
//!   ③ Act:        for each agent in roster order: progress illness, then
//!                  let the BehaviorModel move or quarantine it.
//!   ④ Infect:     hits that are still susceptible become infected.
//!   ⑤ Record:     tick += 1, recount, notify observers.
//! ```
//!
//! Every draw comes from one [`SimRng`](ep_core::SimRng) in a fixed order,
//! so a seed reproduces a run exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ep_core::SimConfig;
//! use ep_field::Grid;
//! use ep_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let grid = Grid::new(config.depth, config.width);
//! let mut sim = SimBuilder::new(config, grid).build()?;
//! sim.reset(&mut NoopObserver)?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.population());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimPhase};
pub use stats::{FieldStats, PopulationCounts};
