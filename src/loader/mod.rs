//! Course file loading
//!
//! This module discovers candidate data files and parses comma-separated
//! course rows into a [`Catalog`].
//!
//! The file format is deliberately permissive: no header row, no quoting or
//! escaping of embedded commas, whitespace around fields is insignificant.
//! Rows that do not yield a course number and a title are skipped silently;
//! the skip count is reported back in [`LoadStats`] rather than surfaced as
//! warnings.

use crate::catalog::{Catalog, Course};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Counts produced by a completed load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows admitted to the catalog
    pub loaded: usize,
    /// Non-blank rows rejected (fewer than two fields, or an empty
    /// number or title after trimming)
    pub skipped: usize,
}

/// Load a catalog from a file path.
///
/// Fails with [`Error::FileOpen`] when the path cannot be opened; the
/// caller's existing catalog is never touched because a fresh one is built
/// here and only handed over on success.
pub fn load_path(path: &Path) -> Result<(Catalog, LoadStats)> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.display().to_string(),
        source,
    })?;

    let (catalog, stats) = parse_courses(file).map_err(|source| Error::Csv {
        path: path.display().to_string(),
        source,
    })?;

    debug!(
        path = %path.display(),
        loaded = stats.loaded,
        skipped = stats.skipped,
        "parsed course file"
    );
    Ok((catalog, stats))
}

/// Parse course rows from any reader into a fresh catalog.
///
/// First field = course number, second = title, all further non-empty
/// fields = prerequisites in file order.
fn parse_courses<R: Read>(reader: R) -> std::result::Result<(Catalog, LoadStats), csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = Catalog::new();
    let mut stats = LoadStats::default();

    for record in csv_reader.records() {
        let record = record?;

        let number = record.get(0).unwrap_or("");
        let title = record.get(1).unwrap_or("");
        if number.is_empty() || title.is_empty() {
            stats.skipped += 1;
            continue;
        }

        let prerequisites: Vec<String> = record
            .iter()
            .skip(2)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        catalog.insert(Course::new(number, title).with_prerequisites(prerequisites));
        stats.loaded += 1;
    }

    Ok((catalog, stats))
}

/// List regular files in `dir` with the given extension, sorted by path so
/// the enumerated selection menu is deterministic.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
