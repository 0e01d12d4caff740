// LogSift - util/constants.rs
//
// Single source of truth for all named constants, paths, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "LogSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input / output
// =============================================================================

/// Fixed input path, resolved against the working directory.
pub const INPUT_FILE: &str = "logs.txt";

/// Default output path when neither `--out` nor the config file supplies one.
pub const DEFAULT_OUTPUT_FILE: &str = "filtered_logs.txt";

// =============================================================================
// Record format
// =============================================================================

/// Character separating the fields of a record.
pub const FIELD_SEPARATOR: char = '|';

/// Exact number of fields a line must split into to be a record:
/// timestamp, level, service, message.
pub const RECORD_FIELD_COUNT: usize = 4;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a rejected input line included in trace output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name, looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
