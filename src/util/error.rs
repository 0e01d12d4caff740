// LogSift - util/error.rs
//
// Typed errors with context-preserving chains. No string-based propagation.
//
// Deliberately small: malformed records are not errors (they are silently
// skipped), and a missing input file is a recognised condition reported via
// a zeroed summary. Only genuine I/O failures reach this type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a filter run.
#[derive(Debug)]
pub enum RunError {
    /// I/O error with path and operation context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl RunError {
    /// Wrap an `io::Error` with the path and operation that produced it.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}

/// Convenience type alias for LogSift results.
pub type Result<T> = std::result::Result<T, RunError>;
