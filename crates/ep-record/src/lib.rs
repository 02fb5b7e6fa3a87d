//! `ep-record`: per-tick population records for the epidemic simulator.
//!
//! [`RecordObserver`] implements `ep_sim::SimObserver` and collects a
//! [`SimulationRecord`]: three header rows describing the run, then one
//! `[Susceptible, Infected, Recovered]` row per recorded tick.
//!
//! | Row            | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | header 0       | parameter names (`Seed`, `Agent Probability`, …)            |
//! | header 1       | parameter values for this run                               |
//! | header 2       | `Susceptible`, `Infected`, `Recovered`                      |
//! | data 0..=n     | counts at tick 0 (after reset) through tick n               |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ep_record::RecordObserver;
//!
//! let mut obs = RecordObserver::new();
//! sim.reset(&mut obs)?;
//! sim.run(&mut obs)?;
//! for row in obs.record().full_record() {
//!     println!("{}", row.join(","));
//! }
//! ```

pub mod observer;
pub mod record;
pub mod row;


pub use observer::RecordObserver;
pub use record::SimulationRecord;
pub use row::{RunHeader, TickRow};
