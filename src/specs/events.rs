//! Spec for the season's event list.
//!
//! Every competition on the index page is an `<a>` whose href carries
//! `event_details`. Championship divisions are skipped by link text.
//! Hrefs are mostly query-only (`?page=event_details&eid=…`) and are resolved
//! against the site prefix.

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::config::consts::EVENT_LINK_MARKER;
use crate::config::SiteOptions;
use crate::core::html::{raw_text, selector};
use crate::core::net::Fetch;
use crate::core::sanitize::contains_ci;
use crate::error::{Result, ScrapeError};

pub fn list_events(fetcher: &dyn Fetch, site: &SiteOptions) -> Result<Vec<Url>> {
    let index = parse_url(&site.event_list_url)?;
    let doc = fetcher.fetch(&index)?;
    let events = parse_event_links(&doc, site)?;
    info!(count = events.len(), url = %index, "events discovered");
    Ok(events)
}

/// Split out for unit tests.
pub fn parse_event_links(html_doc: &str, site: &SiteOptions) -> Result<Vec<Url>> {
    let prefix = parse_url(&site.url_prefix)?;
    let doc = Html::parse_document(html_doc);
    let a = selector("a[href]")?;

    let mut out = Vec::new();
    for link in doc.select(&a) {
        let Some(href) = link.value().attr("href") else { continue };
        if !href.contains(EVENT_LINK_MARKER) { continue; }

        let text = raw_text(link);
        if contains_ci(&text, &site.exclude_text) {
            debug!(event = %text.trim(), "skipping excluded event");
            continue;
        }

        let url = prefix.join(href).map_err(|source| ScrapeError::Url { input: s!(href), source })?;
        out.push(url);
    }
    Ok(out)
}

pub(crate) fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|source| ScrapeError::Url { input: s!(input), source })
}
