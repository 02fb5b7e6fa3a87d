//! The simulation engine.

use tracing::{debug, info};

use ep_agent::{AgentStore, populate};
use ep_behavior::{BehaviorModel, TickContext};
use ep_core::{SimConfig, SimRng, Tick};
use ep_disease::{ContactSnapshot, TransmissionModel, infect_all};
use ep_field::Field;

use crate::{FieldStats, PopulationCounts, SimError, SimObserver, SimResult};

/// Lifecycle of a [`Sim`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimPhase {
    /// Built but never reset; stepping is an error.
    Uninitialised,
    /// Reset and not yet stepped.
    Ready,
    /// At least one tick has run and someone is still infected.
    Running,
    /// Nobody is infected; further steps do nothing.
    Finished,
}

/// The simulation engine.
///
/// Owns the field, the agent store and the run RNG.  Construct via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<F: Field, B: BehaviorModel> {
    pub config:   SimConfig,
    pub field:    F,
    pub agents:   AgentStore<F::Location>,
    pub behavior: B,
    pub rng:      SimRng,

    stats:        FieldStats,
    transmission: TransmissionModel,
    tick:         Tick,
    phase:        SimPhase,
}

impl<F: Field, B: BehaviorModel> Sim<F, B> {
    pub(crate) fn new(config: SimConfig, field: F, behavior: B) -> Self {
        let rng = SimRng::new(config.seed);
        let transmission = TransmissionModel::new(&config);
        Self {
            config,
            field,
            agents: AgentStore::new(),
            behavior,
            rng,
            stats: FieldStats::new(),
            transmission,
            tick: Tick::ZERO,
            phase: SimPhase::Uninitialised,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Reseed, repopulate the field and record the initial population.
    ///
    /// Resetting twice with the same config yields the same population.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.rng = SimRng::new(self.config.seed);
        self.transmission = TransmissionModel::new(&self.config);
        self.agents = populate(&mut self.field, &self.config, &mut self.rng)?;
        self.tick = Tick::ZERO;
        self.stats.invalidate();

        let counts = self.population();
        info!(seed = self.config.seed, topology = self.config.topology.name(), %counts, "reset");

        observer.on_reset(&self.config);
        observer.on_record(self.tick, &counts);

        if counts.is_viable() {
            self.phase = SimPhase::Ready;
        } else {
            self.finish(counts, observer);
        }
        Ok(())
    }

    /// Advance one tick.
    ///
    /// Returns `Ok(true)` if a tick ran, `Ok(false)` if the run had already
    /// finished.
    ///
    /// # Errors
    ///
    /// [`SimError::NotInitialised`] before the first [`reset`](Self::reset).
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        match self.phase {
            SimPhase::Uninitialised => return Err(SimError::NotInitialised),
            SimPhase::Finished => return Ok(false),
            SimPhase::Ready | SimPhase::Running => {}
        }

        observer.on_tick_start(self.tick);
        self.process_tick()?;
        self.tick = self.tick + 1;
        self.stats.invalidate();

        let counts = self.population();
        debug!(tick = %self.tick, %counts, "tick");
        observer.on_record(self.tick, &counts);

        if counts.is_viable() {
            self.phase = SimPhase::Running;
        } else {
            self.finish(counts, observer);
        }
        Ok(true)
    }

    /// Step until nobody is infected.
    ///
    /// Stops early, without finishing, if `observer.keep_running` says so.
    /// Returns the number of ticks run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        let mut ran = 0;
        while observer.keep_running(self.tick) && self.step(observer)? {
            ran += 1;
        }
        Ok(ran)
    }

    /// Step at most `n` ticks, stopping early once nobody is infected.
    ///
    /// Returns the number of ticks run.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut ran = 0;
        while ran < n && observer.keep_running(self.tick) && self.step(observer)? {
            ran += 1;
        }
        Ok(ran)
    }

    /// Current population counts, recounting if anything changed.
    pub fn population(&mut self) -> PopulationCounts {
        self.stats.counts(&self.field, &self.agents)
    }

    /// Someone is infected, so another tick can change the outcome.
    pub fn is_viable(&mut self) -> bool {
        self.stats.is_viable(&self.field, &self.agents)
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SimPhase::Finished
    }

    pub fn stats(&self) -> &FieldStats {
        &self.stats
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<()> {
        // ── Phase 1+2: contacts and trials against the pre-move world ─────
        let snapshot = ContactSnapshot::capture(&self.field, &self.agents);
        let newly_infected = self.transmission.newly_infected(&snapshot, &mut self.rng);

        // ── Phase 3: every agent acts, roster order ───────────────────────
        let policy = self.config.policy();
        let roster: Vec<_> = self.agents.agent_ids().collect();
        let mut ctx = TickContext::new(self.tick, policy, &mut self.field, &mut self.agents);
        for agent in roster {
            ctx.agents.progress_disease(agent)?;
            self.behavior.act(agent, &mut ctx, &mut self.rng)?;
        }

        // ── Phase 4: apply infections ─────────────────────────────────────
        let infected = infect_all(&mut self.agents, &newly_infected)?;
        debug!(
            tick = %self.tick,
            exposed = snapshot.len(),
            infected,
            "infections applied",
        );
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, counts: PopulationCounts, observer: &mut O) {
        self.phase = SimPhase::Finished;
        info!(tick = %self.tick, %counts, "epidemic over");
        observer.on_sim_end(self.tick, &counts);
    }
}
