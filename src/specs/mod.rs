//! # Page specs
//!
//! One module per page type of the FIRST event site. Each spec knows
//! *where the data lives in the HTML* and how to pull it out; it does not
//! decide when to scrape or where rows end up.
//!
//! ## Call chain
//! ```text
//! runner::run → events::list_events
//!             → event_details::get_event_details
//!                   ↘ match_results / standings / awards
//!             → file::write_csv
//! ```
//!
//! ## Conventions
//! - Networking only through `core::net::Fetch`, so every spec runs offline
//!   against fixtures.
//! - The pure part of each spec (`parse_*`) takes the HTML text and is what
//!   the unit tests drive.
//! - Missing structure is an error (`ScrapeError::NotFound` /
//!   `TableMissing`), never a silent empty result.
pub mod awards;
pub mod event_details;
pub mod events;
pub mod match_results;
pub mod standings;
