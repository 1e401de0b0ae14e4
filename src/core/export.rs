// LogTally - core/export.rs
//
// CSV and JSON export of log records.
// Core layer: writes to any Write trait object.

use crate::core::model::LogRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Output format for `--export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Write records in the given format. Returns the number written.
pub fn export_records<W: Write>(
    records: &[LogRecord],
    format: ExportFormat,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records, writer, export_path),
        ExportFormat::Json => export_json(records, writer, export_path),
    }
}

/// Export records to CSV.
///
/// Writes: line, date, time, level, message
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Header comes from the LogRecord field names.
    for record in records {
        csv_writer.serialize(record).map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;
    }

    if records.is_empty() {
        csv_writer
            .write_record(["line", "date", "time", "level", "message"])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Export records to JSON (array of objects).
pub fn export_json<W: Write>(
    records: &[LogRecord],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    // BufWriter discards flush errors on drop; surface them here.
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    /// Accepts writes, fails on flush (like a full disk behind a BufWriter).
    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
    }

    fn make_record(line: u64, level: &str, message: &str) -> LogRecord {
        LogRecord {
            line,
            date: "2024-01-01".to_string(),
            time: "10:00:05".to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let records = vec![
            make_record(3, "ERROR", "Connection failed"),
            make_record(7, "ERROR", "Retry, then give up"),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&records, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "line,date,time,level,message");
        assert_eq!(lines[1], "3,2024-01-01,10:00:05,ERROR,Connection failed");
        // Embedded comma is quoted.
        assert_eq!(lines[2], "7,2024-01-01,10:00:05,ERROR,\"Retry, then give up\"");
    }

    #[test]
    fn test_csv_export_empty_still_has_header() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            "line,date,time,level,message"
        );
    }

    #[test]
    fn test_json_export() {
        let records = vec![make_record(1, "INFO", "Service started")];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["level"], "INFO");
        assert_eq!(value[0]["message"], "Service started");
        assert_eq!(value[0]["line"], 1);
    }

    #[test]
    fn test_json_export_reports_flush_failure() {
        let records = vec![make_record(1, "INFO", "Service started")];
        let writer = io::BufWriter::new(FailingFlush);
        let result = export_json(&records, writer, &PathBuf::from("full.json"));
        assert!(
            matches!(result, Err(ExportError::Io { .. })),
            "flush failure must surface, got {result:?}"
        );
    }

    #[test]
    fn test_csv_export_reports_flush_failure() {
        let records = vec![make_record(1, "INFO", "Service started")];
        let result = export_csv(&records, FailingFlush, &PathBuf::from("full.csv"));
        assert!(
            matches!(result, Err(ExportError::Io { .. })),
            "flush failure must surface, got {result:?}"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat { .. })
        ));
    }
}
