// src/runner.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    config::AppOptions,
    core::net::Fetch,
    data::MatchResultsDataset,
    error::Result,
    file,
    progress::Progress,
    specs::{event_details, events},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub events: usize,
    pub rows: usize,
}

/// Discover events, scrape each in order, then write one CSV.
///
/// Strictly sequential. The first failure aborts the run and nothing is
/// written; the failing event URL is logged before the error is returned.
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let events = events::list_events(fetcher, &opts.site)?;
    progress.begin(events.len());

    let mut dataset = MatchResultsDataset::new();

    for (i, url) in events.iter().enumerate() {
        let report = event_details::get_event_details(fetcher, opts, url, progress)
            .inspect_err(|e| error!(event = %url, kind = ?e.kind(), error = %e, "event scrape failed"))?;

        info!(event = %report.name, rows = report.match_results.len(), "event done");
        dataset.append(report.match_results);
        progress.item_done(i, &report.name);
    }

    progress.finish();

    let path = file::write_csv(&opts.export, &dataset)?;
    Ok(RunSummary { path, events: events.len(), rows: dataset.len() })
}
