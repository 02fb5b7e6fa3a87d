//! `RecordObserver`: bridges `SimObserver` to a [`SimulationRecord`].

use ep_core::{SimConfig, Tick};
use ep_sim::{PopulationCounts, SimObserver};

use crate::{RunHeader, SimulationRecord, TickRow};

/// A [`SimObserver`] that fills a [`SimulationRecord`].
///
/// Each reset starts a fresh record, so one observer can follow a sim across
/// several runs and always holds the latest.
#[derive(Debug, Default)]
pub struct RecordObserver {
    record: SimulationRecord,
}

impl RecordObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &SimulationRecord {
        &self.record
    }

    pub fn into_record(self) -> SimulationRecord {
        self.record
    }
}

impl SimObserver for RecordObserver {
    fn on_reset(&mut self, config: &SimConfig) {
        let header = RunHeader::from_config(config);
        self.record.clear();
        self.record.add_header(RunHeader::NAMES.iter().map(|s| (*s).to_owned()).collect());
        self.record.add_header(header.values());
        self.record.add_header(TickRow::names());
    }

    fn on_record(&mut self, tick: Tick, counts: &PopulationCounts) {
        self.record.add_row(TickRow::new(tick, counts));
    }
}
