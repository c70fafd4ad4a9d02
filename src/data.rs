// src/data.rs
//
// The run's accumulated match results.
//
// Rows are only ever appended, in event-discovery order and then page order
// within an event. The dataset is written once at the end of a run.

use crate::types::{MATCH_RESULTS_HEADINGS, MatchResultRow};

#[derive(Clone, Debug, Default)]
pub struct MatchResultsDataset {
    rows: Vec<MatchResultRow>,
}

impl MatchResultsDataset {
    pub fn new() -> Self { Self::default() }

    /// Append one event's rows after everything already collected.
    pub fn append(&mut self, rows: Vec<MatchResultRow>) {
        self.rows.extend(rows);
    }

    pub fn headers(&self) -> &'static [&'static str] { &MATCH_RESULTS_HEADINGS }

    pub fn rows(&self) -> &[MatchResultRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
