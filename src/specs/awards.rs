//! Spec for an event's awards page.
//!
//! Reserved like `standings`: fetched and parsed, nothing extracted.

use tracing::debug;
use url::Url;

use crate::core::net::Fetch;
use crate::error::Result;
use crate::progress::Progress;

use super::standings::count_tables;

pub fn get_awards(
    fetcher: &dyn Fetch,
    url: &Url,
    event_name: &str,
    progress: &mut dyn Progress,
) -> Result<()> {
    progress.log(&format!("\tGetting awards for: {event_name}"));
    let doc = fetcher.fetch(url)?;
    let tables = count_tables(&doc)?;
    debug!(event = %event_name, %url, tables, "awards page parsed; nothing extracted");
    Ok(())
}
