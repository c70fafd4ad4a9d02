//! Spec for an event's match results page.
//!
//! The page has no ids or classes worth keying on. Tables are picked by
//! position (qualification = #2, elimination = #3 by default) and the first
//! three rows of each are title/header decoration.
//!
//! Columns: Time, Description, Match, Red 1-3, Blue 1-3, Red Score, Blue Score.
//! The qualification table has no Description column; an empty one is
//! inserted so both rounds line up under the same header.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::config::{AppOptions, RowShape};
use crate::core::html::{raw_text, selector, trimmed_text};
use crate::core::net::Fetch;
use crate::core::sanitize::fit_width;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::types::{DATA_COLUMNS, MatchResultRow, MatchType};

pub fn get_match_results(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    url: &Url,
    event_name: &str,
    progress: &mut dyn Progress,
) -> Result<Vec<MatchResultRow>> {
    progress.log(&format!("\tGetting match results for: {event_name} (url: {url} )"));

    let doc = fetcher.fetch(url)?;
    let t = std::time::Instant::now();
    let rows = parse_match_results(&doc, url, event_name, opts)?;
    debug!(event = %event_name, rows = rows.len(), elapsed = ?t.elapsed(), "parsed match results");
    Ok(rows)
}

/// Split out for unit tests and benches.
/// Qualification rows first, then elimination rows, each in page order.
pub fn parse_match_results(
    html_doc: &str,
    url: &Url,
    event_name: &str,
    opts: &AppOptions,
) -> Result<Vec<MatchResultRow>> {
    let layout = &opts.layout;
    let year = opts.site.year.as_str();

    let doc = Html::parse_document(html_doc);
    let table_sel = selector("table")?;
    let tr = selector("tr")?;
    let td = selector("td")?;

    let tables: Vec<ElementRef<'_>> = doc.select(&table_sel).collect();
    let pick = |index: usize| {
        tables.get(index).copied().ok_or_else(|| ScrapeError::TableMissing {
            index,
            found: tables.len(),
            url: url.to_string(),
        })
    };
    let qual_table = pick(layout.qualification_table)?;
    let elim_table = pick(layout.elimination_table)?;

    let mut out = Vec::new();

    for row in qual_table.select(&tr).skip(layout.header_rows) {
        let mut cells = row_cells(row, &td, trimmed_text);
        // No Description column in this table.
        cells.insert(1.min(cells.len()), s!());
        let cells = shape(cells, layout.row_shape, MatchType::Qualification, event_name);
        out.push(MatchResultRow::tagged(cells, MatchType::Qualification, event_name, year));
    }

    let elim_text: fn(ElementRef<'_>) -> String = match layout.row_shape {
        RowShape::Normalized => trimmed_text,
        RowShape::Legacy => raw_text,
    };
    for row in elim_table.select(&tr).skip(layout.header_rows) {
        let cells = row_cells(row, &td, elim_text);
        let cells = shape(cells, layout.row_shape, MatchType::Elimination, event_name);
        out.push(MatchResultRow::tagged(cells, MatchType::Elimination, event_name, year));
    }

    Ok(out)
}

/* ---------------- helpers ---------------- */

fn row_cells(row: ElementRef<'_>, td: &Selector, text: fn(ElementRef<'_>) -> String) -> Vec<String> {
    row.select(td).map(text).collect()
}

fn shape(mut cells: Vec<String>, shape: RowShape, kind: MatchType, event_name: &str) -> Vec<String> {
    if shape == RowShape::Normalized {
        let before = fit_width(&mut cells, DATA_COLUMNS);
        if before != DATA_COLUMNS {
            warn!(event = %event_name, %kind, cells = before, "row width mismatch; padded/truncated");
        }
    }
    cells
}
