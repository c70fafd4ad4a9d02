// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything a run needs, passed explicitly into discovery, parsers and export.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub site: SiteOptions,
    pub layout: LayoutOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults for a different season (event list URL and year tag both follow).
    pub fn for_year(year: &str) -> Self {
        Self {
            site: SiteOptions::for_year(year),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Value written into the Year column.
    pub year: String,
    pub event_list_url: String,
    /// Base that event links are resolved against.
    pub url_prefix: String,
    /// Event links whose text contains this (case-insensitive) are skipped.
    pub exclude_text: String,
}

impl SiteOptions {
    pub fn for_year(year: &str) -> Self {
        Self {
            year: s!(year),
            event_list_url: join!(URL_PREFIX, EVENT_LIST_QUERY, year),
            url_prefix: s!(URL_PREFIX),
            exclude_text: s!(EXCLUDE_TEXT),
        }
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self::for_year(YEAR)
    }
}

/// How rows are shaped before the tag columns are appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RowShape {
    /// Trim every cell and pad/truncate to the 11 data columns.
    #[default]
    Normalized,
    /// Reproduce the old scrape: elimination cells untrimmed, no padding,
    /// event name taken as is.
    Legacy,
}

/// Positional layout of the match results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    pub qualification_table: usize,
    pub elimination_table: usize,
    /// Leading `<tr>` rows of each table that carry no match data.
    pub header_rows: usize,
    pub row_shape: RowShape,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            qualification_table: QUALIFICATION_TABLE,
            elimination_table: ELIMINATION_TABLE,
            header_rows: HEADER_ROWS,
            row_shape: RowShape::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Option<Duration>,
    /// Honor `HTTP_PROXY` and friends.
    pub use_system_proxy: bool,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
            use_system_proxy: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub delimiter: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            delimiter: CSV_SEP,
        }
    }
}
