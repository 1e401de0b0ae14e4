// LogTally - app/render.rs
//
// Plain-text report layout:
//
//   Log level | Count
//   ----------|-------
//   INFO      | 1
//   ...
//
// followed, when a level was requested, by a blank line and either the
// matching records (`date time - message`) or a "not found" notice.

use crate::app::pipeline::{LevelDetails, Report};
use crate::core::model::LevelCounts;
use crate::util::constants::LEVEL_COLUMN_WIDTH;
use std::io::{self, Write};

/// Write the count table.
pub fn render_counts<W: Write>(counts: &LevelCounts, out: &mut W) -> io::Result<()> {
    writeln!(out, "Log level | Count")?;
    writeln!(out, "----------|-------")?;
    for (level, count) in counts.iter() {
        writeln!(
            out,
            "{:<width$} | {count}",
            level.as_str(),
            width = LEVEL_COLUMN_WIDTH
        )?;
    }
    Ok(())
}

/// Write the level drill-down section, including its leading blank line.
pub fn render_details<W: Write>(details: &LevelDetails, out: &mut W) -> io::Result<()> {
    if details.records.is_empty() {
        writeln!(out, "\nLog details for level '{}' not found.", details.target)?;
        return Ok(());
    }

    writeln!(out, "\nLog details for level '{}':", details.target)?;
    for record in &details.records {
        writeln!(out, "{} {} - {}", record.date, record.time, record.message)?;
    }
    Ok(())
}

/// Write the full report.
pub fn render_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    render_counts(&report.counts, out)?;
    if let Some(details) = &report.details {
        render_details(details, out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_report;

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        render_report(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counts_only() {
        let report = build_report(["2024-01-01 10:00:00 WARNING disk at 91%"], None);
        assert_eq!(
            render(&report),
            "Log level | Count\n\
             ----------|-------\n\
             INFO      | 0\n\
             ERROR     | 0\n\
             DEBUG     | 0\n\
             WARNING   | 1\n"
        );
    }

    #[test]
    fn test_details_listing() {
        let report = build_report(
            [
                "2024-01-01 10:00:00 INFO Service started",
                "2024-01-01 10:00:05 ERROR Connection failed",
                "2024-01-01 10:00:09 error Retry failed",
            ],
            Some("Error"),
        );
        assert_eq!(
            render(&report),
            "Log level | Count\n\
             ----------|-------\n\
             INFO      | 1\n\
             ERROR     | 1\n\
             DEBUG     | 0\n\
             WARNING   | 0\n\
             \n\
             Log details for level 'ERROR':\n\
             2024-01-01 10:00:05 - Connection failed\n\
             2024-01-01 10:00:09 - Retry failed\n"
        );
    }

    #[test]
    fn test_details_not_found() {
        let report = build_report(["2024-01-01 10:00:00 INFO up"], Some("debug"));
        let output = render(&report);
        assert!(
            output.ends_with("WARNING   | 0\n\nLog details for level 'DEBUG' not found.\n"),
            "unexpected output:\n{output}"
        );
    }
}
