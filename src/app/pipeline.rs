// LogTally - app/pipeline.rs
//
// Drives one run: lines -> records -> counts (+ optional level details).
// Also owns the file-backed export step so the core stays I/O free.

use crate::core::aggregate::count_by_level;
use crate::core::export::{export_records, ExportFormat};
use crate::core::filter::filter_by_level;
use crate::core::model::{LevelCounts, LogRecord};
use crate::core::parser::parse_lines;
use crate::platform::fs::{read_log_file, split_lines};
use crate::util::error::{ExportError, InputError};
use chrono::NaiveDateTime;
use std::path::Path;

/// Records matching the requested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDetails {
    /// Requested level, upper-cased for display.
    pub target: String,
    /// Matching records in input order. Empty means "not found".
    pub records: Vec<LogRecord>,
}

/// Everything produced by one pass over a log.
#[derive(Debug, Clone)]
pub struct Report {
    pub records: Vec<LogRecord>,
    pub counts: LevelCounts,
    /// Present only when a level was requested.
    pub details: Option<LevelDetails>,
    pub lines_read: u64,
    pub lines_skipped: u64,
    /// Earliest record instant (records with impossible dates ignored).
    pub earliest: Option<NaiveDateTime>,
    /// Latest record instant.
    pub latest: Option<NaiveDateTime>,
}

impl Report {
    /// Records an export should contain: the level details when a level was
    /// requested, otherwise every parsed record.
    pub fn export_set(&self) -> &[LogRecord] {
        match &self.details {
            Some(details) => &details.records,
            None => &self.records,
        }
    }
}

/// Build a report from already-read lines.
///
/// An empty `target_level` is treated the same as no level at all.
pub fn build_report<I, S>(lines: I, target_level: Option<&str>) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcome = parse_lines(lines);
    let counts = count_by_level(&outcome.records);

    let details = target_level
        .filter(|level| !level.is_empty())
        .map(|level| LevelDetails {
            target: level.to_uppercase(),
            records: filter_by_level(&outcome.records, level),
        });

    let mut earliest: Option<NaiveDateTime> = None;
    let mut latest: Option<NaiveDateTime> = None;
    for ts in outcome.records.iter().filter_map(LogRecord::timestamp) {
        earliest = Some(earliest.map_or(ts, |e| e.min(ts)));
        latest = Some(latest.map_or(ts, |l| l.max(ts)));
    }

    Report {
        records: outcome.records,
        counts,
        details,
        lines_read: outcome.lines_read,
        lines_skipped: outcome.lines_skipped,
        earliest,
        latest,
    }
}

/// Load `path` and build its report.
pub fn run(path: &Path, target_level: Option<&str>) -> Result<Report, InputError> {
    let content = read_log_file(path)?;
    let report = build_report(split_lines(&content), target_level);

    tracing::info!(
        path = %path.display(),
        lines = report.lines_read,
        records = report.records.len(),
        skipped = report.lines_skipped,
        "Log processed"
    );

    Ok(report)
}

/// Write `records` to a new file at `path`.
///
/// Refuses before creating the file if `records` exceeds `max_records`.
pub fn export_to_file(
    records: &[LogRecord],
    path: &Path,
    format: ExportFormat,
    max_records: usize,
) -> Result<usize, ExportError> {
    if records.len() > max_records {
        return Err(ExportError::TooManyRecords {
            count: records.len(),
            max: max_records,
        });
    }

    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let written = export_records(records, format, writer, path)?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        records = written,
        "Export complete"
    );

    Ok(written)
}
