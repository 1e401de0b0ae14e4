// LogTally - core/aggregate.rs
//
// Per-level tallying over the known level set.
// Core layer: pure logic, no I/O.

use crate::core::model::{KnownLevel, LevelCounts, LogRecord};

/// Count records by severity level.
///
/// Only exact, case-sensitive matches against INFO, ERROR, DEBUG and
/// WARNING are counted. `info`, `Error`, `NOTICE` and the like contribute
/// nothing here (they remain visible to the level filter).
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    let mut uncounted = 0usize;

    for record in records {
        match KnownLevel::from_exact(&record.level) {
            Some(level) => counts.increment(level),
            None => uncounted += 1,
        }
    }

    tracing::debug!(
        records = records.len(),
        counted = counts.total(),
        uncounted,
        "Level aggregation complete"
    );

    counts
}
