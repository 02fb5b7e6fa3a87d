//! The in-memory simulation record.

use crate::TickRow;

/// Header rows followed by one [`TickRow`] per recorded tick.
///
/// Append-only between resets.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationRecord {
    headers: Vec<Vec<String>>,
    rows:    Vec<TickRow>,
}

impl SimulationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_header(&mut self, header: Vec<String>) {
        self.headers.push(header);
    }

    pub fn add_row(&mut self, row: TickRow) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[Vec<String>] {
        &self.headers
    }

    pub fn rows(&self) -> &[TickRow] {
        &self.rows
    }

    pub fn last_row(&self) -> Option<&TickRow> {
        self.rows.last()
    }

    /// Data rows rendered as strings.
    pub fn data(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(TickRow::cells).collect()
    }

    /// Headers then data, every cell a string.
    pub fn full_record(&self) -> Vec<Vec<String>> {
        let mut out = self.headers.clone();
        out.extend(self.data());
        out
    }

    pub fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}
