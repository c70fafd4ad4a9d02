// src/config/consts.rs

// Season
pub const YEAR: &str = "2014";

// Site
pub const URL_PREFIX: &str = "https://my.usfirst.org/myarea/index.lasso";
pub const EVENT_LIST_QUERY: &str = "?event_type=FRC&year=";

// Link markers (substring of href)
pub const EVENT_LINK_MARKER: &str = "event_details";
pub const MATCH_RESULTS_MARKER: &str = "matchresults";
pub const STANDINGS_MARKER: &str = "standings";
pub const AWARDS_MARKER: &str = "awards";

// Event list filter (visible link text, case-insensitive)
pub const EXCLUDE_TEXT: &str = "championship";

// Event page label cell
pub const EVENT_LABEL: &str = "Event";

// Match results page layout; found empirically
pub const QUALIFICATION_TABLE: usize = 2;
pub const ELIMINATION_TABLE: usize = 3;
pub const HEADER_ROWS: usize = 3;

// Net
pub const USER_AGENT: &str = concat!("frc_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Export
pub const DEFAULT_OUT_FILE: &str = "match_results.csv";
pub const CSV_SEP: u8 = b',';
