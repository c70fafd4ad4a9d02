//! Spec for an event detail page.
//!
//! The page is a label/value table: `<td>Event</td><td>2014 Lake Superior Regional</td>`.
//! Sub-pages are linked by href markers (`matchresults`, `standings`, `awards`).
//! The site does not always link standings and awards from here; those fall
//! back to the match results link.

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::config::{AppOptions, RowShape};
use crate::config::consts::{AWARDS_MARKER, EVENT_LABEL, MATCH_RESULTS_MARKER, STANDINGS_MARKER};
use crate::core::html::{first_href_containing, next_element_sibling, raw_text, selector, single_string};
use crate::core::net::Fetch;
use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::types::{EventDetails, EventReport};

use super::{awards, match_results, standings};

pub fn get_event_details(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    event_url: &Url,
    progress: &mut dyn Progress,
) -> Result<EventReport> {
    let doc = fetcher.fetch(event_url)?;
    let details = parse_event_page(&doc, event_url, opts.layout.row_shape)?;

    info!(event = %details.name, "getting event details");
    progress.log(&format!("Getting details for event: {}", details.name));

    let rows = match_results::get_match_results(
        fetcher, opts, &details.match_results_url, &details.name, progress,
    )?;
    standings::get_standings(fetcher, &details.standings_url, &details.name, progress)?;
    awards::get_awards(fetcher, &details.awards_url, &details.name, progress)?;

    Ok(EventReport {
        name: details.name,
        match_results: rows,
        standings: details.standings_url,
        awards: details.awards_url,
    })
}

/// Split out for unit tests. `page_url` resolves relative links and labels errors.
/// `Legacy` keeps the name cell's text as is; `Normalized` collapses its whitespace.
pub fn parse_event_page(html_doc: &str, page_url: &Url, shape: RowShape) -> Result<EventDetails> {
    let doc = Html::parse_document(html_doc);

    let name = event_name(&doc, shape)?.ok_or_else(|| ScrapeError::NotFound {
        what: "Event label",
        url: page_url.to_string(),
    })?;

    let match_results_url = match first_href_containing(&doc, MATCH_RESULTS_MARKER)? {
        Some(href) => resolve(page_url, href)?,
        None => {
            return Err(ScrapeError::NotFound {
                what: "match results link",
                url: page_url.to_string(),
            })
        }
    };

    let standings_url = sub_page_or(&doc, page_url, STANDINGS_MARKER, &match_results_url)?;
    let awards_url = sub_page_or(&doc, page_url, AWARDS_MARKER, &match_results_url)?;

    Ok(EventDetails { name, match_results_url, standings_url, awards_url })
}

/* ---------------- helpers ---------------- */

/// Value cell next to the first `<td>` whose lone string mentions "Event".
fn event_name(doc: &Html, shape: RowShape) -> Result<Option<String>> {
    let td = selector("td")?;
    let label = doc
        .select(&td)
        .find(|cell| single_string(*cell).is_some_and(|t| t.contains(EVENT_LABEL)));

    Ok(label.and_then(next_element_sibling).map(|value| {
        let text = raw_text(value);
        match shape {
            RowShape::Normalized => normalize_ws(&text),
            RowShape::Legacy => text,
        }
    }))
}

fn sub_page_or(doc: &Html, page_url: &Url, marker: &str, fallback: &Url) -> Result<Url> {
    match first_href_containing(doc, marker)? {
        Some(href) => resolve(page_url, href),
        None => {
            debug!(%marker, %page_url, "no dedicated link; using match results page");
            Ok(fallback.clone())
        }
    }
}

fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| ScrapeError::Url { input: s!(href), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://my.usfirst.org/myarea/index.lasso?page=event_details&eid=11010").unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
          <table>
            <tr><td nowrap>Event</td>
                <td>2014 Lake   Superior Regional</td></tr>
            <tr><td>Event Type</td><td>Regional</td></tr>
            <tr><td><b>Links</b></td>
                <td><a href="http://www2.usfirst.org/2014comp/Events/DMN/matchresults.html">Match Results</a>
                    <a href="http://www2.usfirst.org/2014comp/Events/DMN/rankings.html">Standings</a>
                    <a href="http://www2.usfirst.org/2014comp/Events/DMN/awards.html">Awards</a></td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn reads_name_and_sub_page_links() {
        let d = parse_event_page(PAGE, &page_url(), RowShape::Normalized).unwrap();
        assert_eq!(d.name, "2014 Lake Superior Regional");
        assert_eq!(d.match_results_url.as_str(), "http://www2.usfirst.org/2014comp/Events/DMN/matchresults.html");
        assert_eq!(d.awards_url.as_str(), "http://www2.usfirst.org/2014comp/Events/DMN/awards.html");
        // The site calls them "rankings"; no href carries "standings".
        assert_eq!(d.standings_url, d.match_results_url);
    }

    #[test]
    fn distinct_standings_link_is_used_when_present() {
        let doc = r#"
            <table><tr><td>Event</td><td>X</td></tr></table>
            <a href="matchresults.html">M</a><a href="standings.html">S</a>
        "#;
        let d = parse_event_page(doc, &page_url(), RowShape::Normalized).unwrap();
        assert_eq!(d.standings_url.as_str(), "https://my.usfirst.org/myarea/standings.html");
        assert_eq!(d.awards_url, d.match_results_url);
    }

    #[test]
    fn label_cell_must_hold_a_single_string() {
        // Mixed content has no single string, even though its text mentions "Event".
        let doc = r#"
            <table><tr><td><span>Event</span> listing</td><td>wrong</td></tr>
                   <tr><td>Event</td><td>right</td></tr></table>
            <a href="matchresults.html">M</a>
        "#;
        assert_eq!(parse_event_page(doc, &page_url(), RowShape::Normalized).unwrap().name, "right");
    }

    #[test]
    fn label_wrapped_in_lone_element_matches() {
        let doc = r#"
            <table><tr><td><b>Event</b></td><td>Bold Regional</td></tr>
                   <tr><td>Event</td><td>later</td></tr></table>
            <a href="matchresults.html">M</a>
        "#;
        assert_eq!(parse_event_page(doc, &page_url(), RowShape::Normalized).unwrap().name, "Bold Regional");
    }

    #[test]
    fn legacy_shape_keeps_raw_name() {
        let d = parse_event_page(PAGE, &page_url(), RowShape::Legacy).unwrap();
        assert_eq!(d.name, "2014 Lake   Superior Regional");

        let doc = r#"<table><tr><td>Event</td><td>
            Padded Regional </td></tr></table><a href="matchresults.html">M</a>"#;
        let d = parse_event_page(doc, &page_url(), RowShape::Legacy).unwrap();
        assert_eq!(d.name, "\n            Padded Regional ");
    }

    #[test]
    fn missing_label_is_not_found() {
        let doc = r#"<table><tr><td>Venue</td><td>Duluth</td></tr></table><a href="matchresults.html">M</a>"#;
        let err = parse_event_page(doc, &page_url(), RowShape::Normalized).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound { what: "Event label", .. }));
    }

    #[test]
    fn missing_match_results_link_is_not_found() {
        let doc = r#"<table><tr><td>Event</td><td>X</td></tr></table><a href="awards.html">A</a>"#;
        let err = parse_event_page(doc, &page_url(), RowShape::Normalized).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound { what: "match results link", .. }));
    }
}
