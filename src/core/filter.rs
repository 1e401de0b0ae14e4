// LogTally - core/filter.rs
//
// Single-level record filter.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;

/// Case-insensitive match on a record's level.
///
/// Unlike the aggregator, this is not restricted to the known level set:
/// `NOTICE` or `trace` can be filtered for if asked by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    target: String,
}

impl LevelFilter {
    /// Build a filter for `target`. Stored upper-cased.
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_uppercase(),
        }
    }

    /// Normalised (upper-case) target level.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// True if the record's level equals the target, ignoring case.
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.level.to_uppercase() == self.target
    }

    /// Indices of matching records, in input order.
    pub fn apply(&self, records: &[LogRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Records whose level equals `target` case-insensitively, in input order.
///
/// An empty result means "no matches" and is not an error.
pub fn filter_by_level(records: &[LogRecord], target: &str) -> Vec<LogRecord> {
    let filter = LevelFilter::new(target);
    let selected: Vec<LogRecord> = filter
        .apply(records)
        .into_iter()
        .map(|idx| records[idx].clone())
        .collect();

    tracing::debug!(
        level = filter.target(),
        matched = selected.len(),
        of = records.len(),
        "Level filter applied"
    );

    selected
}
