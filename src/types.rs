// src/types.rs
use std::fmt;

use url::Url;

pub const MATCH_RESULTS_HEADINGS: [&str; 14] = [
    "Time", "Description", "Match", "Red 1", "Red 2", "Red 3",
    "Blue 1", "Blue 2", "Blue 3", "Red Score", "Blue Score",
    "Match Type", "Event Name", "Year",
];

/// Columns scraped from the page; the rest are tags added by the parser.
pub const DATA_COLUMNS: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchType {
    Qualification,
    Elimination,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Qualification => "Qualification",
            MatchType::Elimination => "Elimination",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One match, in `MATCH_RESULTS_HEADINGS` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResultRow {
    fields: Vec<String>,
}

impl MatchResultRow {
    /// Append the tag columns (match type, event name, year) to scraped cells.
    pub fn tagged(mut cells: Vec<String>, kind: MatchType, event_name: &str, year: &str) -> Self {
        cells.reserve(3);
        cells.push(s!(kind.as_str()));
        cells.push(s!(event_name));
        cells.push(s!(year));
        Self { fields: cells }
    }

    pub fn fields(&self) -> &[String] { &self.fields }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
    pub fn get(&self, i: usize) -> Option<&str> { self.fields.get(i).map(String::as_str) }
}

/// Links found on an event detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub name: String,
    pub match_results_url: Url,
    pub standings_url: Url,
    pub awards_url: Url,
}

/// What one event contributes to a run. Only `match_results` carries rows;
/// standings and awards are the page URLs.
#[derive(Clone, Debug)]
pub struct EventReport {
    pub name: String,
    pub match_results: Vec<MatchResultRow>,
    pub standings: Url,
    pub awards: Url,
}
