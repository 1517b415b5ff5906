//! Centralized error handling for StatCode
//!
//! This module provides a unified error type that covers all error scenarios
//! in the application: key-value storage, file export, preview writes and
//! persisted-data parsing.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the application.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the application.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // File I/O Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Generic I/O error wrapper
    Io(io::Error),

    /// Failed to write file contents (export, preview surface)
    FileWrite { path: PathBuf, source: io::Error },

    // ─────────────────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to read a value from the key-value store
    StorageRead {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to write a value to the key-value store
    StorageWrite {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stored data is not valid JSON for the expected shape
    Parse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Data directory not found or inaccessible
    DataDirNotFound,

    // ─────────────────────────────────────────────────────────────────────────
    // Application Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Generic application error with a message
    Application(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display trait implementation for user-friendly error messages
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Error::StorageRead { key, source } => {
                write!(f, "Failed to read '{}' from storage: {}", key, source)
            }
            Error::StorageWrite { key, source } => {
                write!(f, "Failed to write '{}' to storage: {}", key, source)
            }
            Error::Parse { message, .. } => write!(f, "Invalid stored data: {}", message),
            Error::DataDirNotFound => write!(f, "Data directory not found"),
            Error::Application(msg) => write!(f, "{}", msg),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::error::Error trait implementation for error chaining
// ─────────────────────────────────────────────────────────────────────────────
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::FileWrite { source, .. } => Some(source),
            Error::StorageRead { source, .. } => Some(source.as_ref()),
            Error::StorageWrite { source, .. } => Some(source.as_ref()),
            Error::Parse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::DataDirNotFound | Error::Application(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test error");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serde_json_error_becomes_parse() {
        let json_result: std::result::Result<Vec<String>, _> = serde_json::from_str("[oops");
        let err = Error::from(json_result.unwrap_err());
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid stored data"));
    }

    #[test]
    fn test_display_storage_errors_name_the_key() {
        let err = Error::StorageWrite {
            key: "projects".to_string(),
            source: Box::new(io::Error::new(io::ErrorKind::Other, "disk full")),
        };
        let msg = err.to_string();
        assert!(msg.contains("'projects'"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_display_file_write() {
        let err = Error::FileWrite {
            path: PathBuf::from("/tmp/out.css"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out.css"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as StdError;
        let err = Error::StorageRead {
            key: "settings".to_string(),
            source: Box::new(io::Error::new(io::ErrorKind::Other, "boom")),
        };
        assert!(err.source().is_some());
        assert!(Error::DataDirNotFound.source().is_none());
        assert!(Error::Application("x".to_string()).source().is_none());
    }

    #[test]
    fn test_unwrap_or_warn_default() {
        let ok: Result<i32> = Ok(7);
        assert_eq!(ok.unwrap_or_warn_default(0, "ctx"), 7);

        let err: Result<i32> = Err(Error::Application("bad".to_string()));
        assert_eq!(err.unwrap_or_warn_default(3, "ctx"), 3);
    }
}
