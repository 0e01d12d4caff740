// LogSift - core/parser.rs
//
// Line-oriented parsing of pipe-delimited log records.
// Core layer: operates on string slices, never touches the filesystem.

use crate::core::model::{Level, LogRecord};
use crate::util::constants::{DEBUG_MAX_LINE_PREVIEW, FIELD_SEPARATOR, RECORD_FIELD_COUNT};

/// Parse a single line into a `LogRecord`.
///
/// A line is valid when it splits on the field separator into exactly
/// four fields and the trimmed level field normalises to a recognised
/// `Level`. Everything else returns `None`; rejects are an expected
/// part of normal operation, not errors, so they are only visible at
/// trace level.
///
/// Splitting is literal with no quoting or escaping: a `|` inside the
/// message yields five fields and the line is rejected. A trailing `|`
/// yields a fifth empty field and is likewise rejected.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() != RECORD_FIELD_COUNT {
        tracing::trace!(
            fields = parts.len(),
            line = preview(line),
            "Rejected line: wrong field count"
        );
        return None;
    }

    let raw_level = parts[1].trim();
    let level = match Level::from_raw(raw_level) {
        Some(level) => level,
        None => {
            tracing::trace!(
                raw_level,
                line = preview(line),
                "Rejected line: unrecognised level"
            );
            return None;
        }
    };

    Some(LogRecord {
        timestamp: parts[0].trim().to_string(),
        level,
        service: parts[2].trim().to_string(),
        message: parts[3].trim().to_string(),
    })
}

/// Truncate a line for trace output without splitting a UTF-8 character.
fn preview(line: &str) -> &str {
    if line.len() <= DEBUG_MAX_LINE_PREVIEW {
        return line;
    }
    let mut end = DEBUG_MAX_LINE_PREVIEW;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}
