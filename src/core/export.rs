// LogSift - core/export.rs
//
// Rendering of records and the summary report.
// Core layer: writes to any Write trait object; the app layer owns the
// files and attaches path context to any failure.

use crate::core::model::{LogRecord, RunSummary};
use std::io::Write;

/// Write one record in the canonical output format.
///
/// The format is `timestamp | LEVEL | service | message` with a single
/// space around each separator and a trailing newline. Fields are
/// written as parsed (trimmed, level uppercased), so re-filtering an
/// output file produces identical bytes.
pub fn write_record<W: Write>(writer: &mut W, record: &LogRecord) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} | {} | {} | {}",
        record.timestamp, record.level, record.service, record.message
    )
}

/// Write the three-line summary report.
///
/// This is the tool's entire stdout contract; nothing else may be
/// printed there. Counts reflect the whole run: scanned is the number
/// of valid records seen, written the number that passed the filters.
pub fn write_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> std::io::Result<()> {
    writeln!(writer, "Valid lines scanned: {}", summary.valid_scanned)?;
    writeln!(writer, "Lines written: {}", summary.written)?;
    writeln!(writer, "Output file: {}", summary.output_file.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Level;
    use std::path::PathBuf;

    fn make_record(level: Level, service: &str, message: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-15 14:30:22".to_string(),
            level,
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_record_format_exact_bytes() {
        let mut buf = Vec::new();
        write_record(&mut buf, &make_record(Level::Warn, "api", "slow response")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "2024-01-15 14:30:22 | WARN | api | slow response\n"
        );
    }

    #[test]
    fn test_record_format_keeps_empty_fields() {
        let record = LogRecord {
            timestamp: String::new(),
            level: Level::Info,
            service: String::new(),
            message: String::new(),
        };
        let mut buf = Vec::new();
        write_record(&mut buf, &record).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), " | INFO |  | \n");
    }

    #[test]
    fn test_summary_exact_lines() {
        let summary = RunSummary {
            valid_scanned: 42,
            written: 7,
            output_file: PathBuf::from("filtered_logs.txt"),
            ..Default::default()
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Valid lines scanned: 42\nLines written: 7\nOutput file: filtered_logs.txt\n"
        );
    }

    #[test]
    fn test_summary_zeroed_counts() {
        let summary = RunSummary {
            output_file: PathBuf::from("out.txt"),
            ..Default::default()
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Valid lines scanned: 0\nLines written: 0\nOutput file: out.txt\n"
        );
    }
}
