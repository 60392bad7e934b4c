//! Error type for journal sync operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while syncing a journal
#[derive(Debug)]
pub enum SyncError {
    /// File store listing or read failed
    Store(io::Error),
    /// Configuration file could not be read or parsed
    Config { path: PathBuf, message: String },
    /// A date string was not `YYYY-MM-DD`
    InvalidDate(String),
    /// Logger backend could not be started
    Logging(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Store(e) => write!(f, "File store error: {}", e),
            SyncError::Config { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
            SyncError::InvalidDate(value) => {
                write!(f, "Invalid date {:?} (expected YYYY-MM-DD)", value)
            }
            SyncError::Logging(message) => write!(f, "Logging setup failed: {}", message),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SyncError {
    fn from(e: io::Error) -> Self {
        SyncError::Store(e)
    }
}

impl From<SyncError> for io::Error {
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Store(inner) => inner,
            other => {
                let kind = match other {
                    SyncError::InvalidDate(_) => io::ErrorKind::InvalidInput,
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}

/// Result alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
