// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::KNOWN_LEVELS;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// A single parsed log line: `<date> <time> <level> <message>`.
///
/// All four text fields are non-empty whenever a record exists. A line that
/// cannot supply all four is dropped by the parser, never half-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// 1-based position of the source line within the input.
    pub line: u64,

    /// Calendar date as written, `YYYY-MM-DD`.
    pub date: String,

    /// Time of day as written, `HH:MM:SS`.
    pub time: String,

    /// Severity token, verbatim (case preserved, not restricted to the
    /// known set).
    pub level: String,

    /// Remainder of the line.
    pub message: String,
}

impl LogRecord {
    /// Interpret `date` + `time` as a calendar instant.
    ///
    /// The parser only checks digit shapes, so `2024-13-45` is a valid record
    /// with no timestamp. Returns `None` in that case.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M:%S").ok()?;
        Some(NaiveDateTime::new(date, time))
    }
}

// =============================================================================
// Known levels
// =============================================================================

/// The four severity levels that are tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnownLevel {
    Info,
    Error,
    Debug,
    Warning,
}

impl KnownLevel {
    /// Returns all variants in report order.
    pub fn all() -> &'static [KnownLevel] {
        &[
            KnownLevel::Info,
            KnownLevel::Error,
            KnownLevel::Debug,
            KnownLevel::Warning,
        ]
    }

    /// Upper-case label as it appears in logs and in the count table.
    pub fn as_str(&self) -> &'static str {
        KNOWN_LEVELS[self.index()]
    }

    /// Exact, case-sensitive lookup. `"INFO"` matches, `"info"` does not.
    pub fn from_exact(raw: &str) -> Option<KnownLevel> {
        Self::all().iter().copied().find(|level| level.as_str() == raw)
    }

    fn index(&self) -> usize {
        match self {
            KnownLevel::Info => 0,
            KnownLevel::Error => 1,
            KnownLevel::Debug => 2,
            KnownLevel::Warning => 3,
        }
    }
}

impl std::fmt::Display for KnownLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Level counts
// =============================================================================

/// Per-level tallies over the known level set.
///
/// All four levels are always present, starting at zero, and iterate in the
/// fixed order INFO, ERROR, DEBUG, WARNING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCounts {
    counts: [usize; 4],
}

impl LevelCounts {
    /// Count for a single level.
    pub fn get(&self, level: KnownLevel) -> usize {
        self.counts[level.index()]
    }

    pub(crate) fn increment(&mut self, level: KnownLevel) {
        self.counts[level.index()] += 1;
    }

    /// `(level, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (KnownLevel, usize)> + '_ {
        KnownLevel::all()
            .iter()
            .map(move |level| (*level, self.get(*level)))
    }

    /// Sum over all four levels.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
