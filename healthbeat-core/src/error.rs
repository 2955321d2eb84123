//! Error types for healthbeat core.

use std::{error::Error, fmt, io};

/// Error type for healthbeat core operations.
#[derive(Debug)]
pub enum HealthbeatError {
    /// An underlying I/O error.
    Io(io::Error),
    /// The external prediction service failed or returned an unusable payload.
    Service(String),
}

impl fmt::Display for HealthbeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Service(message) => write!(f, "prediction service error: {message}"),
        }
    }
}

impl Error for HealthbeatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Service(_) => None,
        }
    }
}

impl From<io::Error> for HealthbeatError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for healthbeat core.
pub type Result<T> = std::result::Result<T, HealthbeatError>;
