//! Spec for an event's standings page.
//!
//! Reserved: the page is fetched and parsed but no rows are extracted yet.
//! A record type for it would follow `match_results` (positional table,
//! skipped header rows, tag columns).

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::core::html::selector;
use crate::core::net::Fetch;
use crate::error::Result;
use crate::progress::Progress;

pub fn get_standings(
    fetcher: &dyn Fetch,
    url: &Url,
    event_name: &str,
    progress: &mut dyn Progress,
) -> Result<()> {
    progress.log(&format!("\tGetting standings for: {event_name}"));
    let doc = fetcher.fetch(url)?;
    let tables = count_tables(&doc)?;
    debug!(event = %event_name, %url, tables, "standings page parsed; nothing extracted");
    Ok(())
}

pub(crate) fn count_tables(html_doc: &str) -> Result<usize> {
    let doc = Html::parse_document(html_doc);
    Ok(doc.select(&selector("table")?).count())
}
