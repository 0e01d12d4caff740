// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::collections::HashMap;
use std::path::PathBuf;

// =============================================================================
// Level
// =============================================================================

/// Recognised log levels, ordered from least to most severe.
///
/// Raw level strings are normalised to uppercase before matching, so
/// "info", "Info", and "INFO" all map to `Level::Info`. Lines carrying
/// any other level are rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Returns all variants in severity order (least severe first).
    pub fn all() -> &'static [Level] {
        &[Level::Info, Level::Warn, Level::Error]
    }

    /// Canonical uppercase label, as written to the output file.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Normalises a raw level field to a recognised level.
    ///
    /// Returns `None` when the uppercased field is not one of the
    /// recognised labels.
    pub fn from_raw(raw: &str) -> Option<Level> {
        match raw.to_uppercase().as_str() {
            "INFO" => Some(Level::Info),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Log Record (normalised output of parsing)
// =============================================================================

/// A single parsed log line, normalised for filtering and export.
///
/// This is the core data unit that flows through filtering and export.
/// All four fields have surrounding whitespace trimmed; the level field
/// is already normalised to a recognised `Level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Timestamp field, kept as opaque trimmed text. Never parsed or
    /// reformatted; lines with an empty timestamp are still valid.
    pub timestamp: String,

    /// Normalised log level.
    pub level: Level,

    /// Service name, trimmed but otherwise untouched (case preserved).
    pub service: String,

    /// Message text, trimmed. May be empty.
    pub message: String,
}

// =============================================================================
// Run Summary
// =============================================================================

/// Summary statistics for a completed filter run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Total physical lines read from the input, including blanks.
    pub lines_read: usize,

    /// Lines that parsed into a valid record (counted before filters).
    pub valid_scanned: usize,

    /// Records that passed the filters and were written to the output.
    pub written: usize,

    /// Non-blank lines rejected as malformed.
    pub malformed: usize,

    /// Valid records by level, counted before filtering.
    pub by_level: HashMap<Level, usize>,

    /// Path the filtered records were written to.
    pub output_file: PathBuf,

    /// Wall-clock run duration.
    pub duration: std::time::Duration,
}
