// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::config::ExportOptions;
use crate::data::MatchResultsDataset;
use crate::error::{Result, ScrapeError};
use crate::types::MatchResultRow;

/// Write the dataset (header first) to `export.out_path`, replacing any existing file.
/// The whole file is rendered before the target is touched.
pub fn write_csv(export: &ExportOptions, dataset: &MatchResultsDataset) -> Result<PathBuf> {
    let path = export.out_path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let bytes = to_csv_bytes(dataset.headers(), dataset.rows(), export.delimiter)?;
    fs::write(&path, bytes)?;

    info!(path = %path.display(), rows = dataset.len(), "wrote match results");
    Ok(path)
}

/// Render header + rows. Fields are quoted only when they hold the
/// delimiter, a quote or a line break; records end in CRLF.
pub fn to_csv_bytes(headers: &[&str], rows: &[MatchResultRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_rows(&mut buf, headers, rows, delimiter)?;
    Ok(buf)
}

/// Write header + rows to any writer.
pub fn write_rows<W: Write>(w: W, headers: &[&str], rows: &[MatchResultRow], delimiter: u8) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        // Legacy-shaped rows may differ in width.
        .flexible(true)
        .from_writer(w);

    out.write_record(headers)?;
    for row in rows {
        out.write_record(row.fields())?;
    }
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
