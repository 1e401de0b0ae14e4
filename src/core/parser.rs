// LogTally - core/parser.rs
//
// Line-oriented log parsing.
// Core layer: accepts already-read lines, never touches the filesystem.
//
// Grammar, anchored at the start of the line:
//
//   YYYY-MM-DD HH:MM:SS LEVEL message...
//
// Lines that do not match are skipped, not reported as errors.

use crate::core::model::LogRecord;
use crate::util::constants;
use regex::Regex;
use std::sync::OnceLock;

/// Result of parsing a sequence of lines.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Successfully parsed records, in input order.
    pub records: Vec<LogRecord>,
    /// Total lines seen (including blank and unparseable ones).
    pub lines_read: u64,
    /// Lines that did not match the grammar.
    pub lines_skipped: u64,
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Literal pattern; exercised by every test in this module.
        Regex::new(
            r"^(?P<date>\d{4}-\d{2}-\d{2}) (?P<time>\d{2}:\d{2}:\d{2}) (?P<level>\w+) (?P<message>.+)",
        )
        .expect("parser: invalid line regex")
    })
}

/// Parse one line into a record.
///
/// Returns `None` when the line does not fit the grammar. The caller is
/// expected to have trimmed surrounding whitespace already. The record's
/// `line` is 0; use `parse_lines` for numbered records.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    parse_numbered(line, 0)
}

fn parse_numbered(line: &str, line_number: u64) -> Option<LogRecord> {
    let caps = line_pattern().captures(line)?;
    Some(LogRecord {
        line: line_number,
        date: caps["date"].to_string(),
        time: caps["time"].to_string(),
        level: caps["level"].to_string(),
        message: caps["message"].to_string(),
    })
}

/// Parse every line of an input sequence.
///
/// Each line is trimmed before matching. Non-matching lines are counted in
/// `lines_skipped` and otherwise ignored; they never abort the pass.
pub fn parse_lines<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ParseOutcome::default();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_number = (idx as u64) + 1;
        outcome.lines_read += 1;

        let line = raw.as_ref().trim();
        match parse_numbered(line, line_number) {
            Some(record) => outcome.records.push(record),
            None => {
                outcome.lines_skipped += 1;
                tracing::trace!(
                    line = line_number,
                    preview = %preview(line),
                    "Skipping line that does not match log grammar"
                );
            }
        }
    }

    tracing::debug!(
        lines = outcome.lines_read,
        records = outcome.records.len(),
        skipped = outcome.lines_skipped,
        "Parsing complete"
    );

    outcome
}

/// Char-boundary-safe truncation for trace output.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((cut, _)) => &line[..cut],
        None => line,
    }
}
