//! Simulation observer trait for progress reporting and data collection.

use ep_core::{SimConfig, Tick};

use crate::PopulationCounts;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Call order
///
/// ```text
/// reset:  on_reset → on_record(T0)            [→ on_sim_end if nothing is infected]
/// step:   on_tick_start → on_record(T+1)      [→ on_sim_end once nobody is infected]
/// run:    keep_running is asked before every step
/// ```
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_record(&mut self, tick: Tick, counts: &PopulationCounts) {
///         println!("{tick}: {counts}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per reset, before the initial record.
    fn on_reset(&mut self, _config: &SimConfig) {}

    /// Called at the start of each tick, before contacts are captured.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with fresh counts after reset and after every tick.
    fn on_record(&mut self, _tick: Tick, _counts: &PopulationCounts) {}

    /// Called once when the run finishes because nobody is infected.
    fn on_sim_end(&mut self, _final_tick: Tick, _counts: &PopulationCounts) {}

    /// Asked before each tick of [`Sim::run`][crate::Sim::run] and
    /// [`Sim::run_ticks`][crate::Sim::run_ticks]; returning `false` stops
    /// the run between ticks without finishing it.
    fn keep_running(&mut self, _tick: Tick) -> bool {
        true
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
