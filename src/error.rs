//! Error types for browser integration.
//!
//! - [`StorageError`] - localStorage operations for the saved theme

use std::fmt;

/// Theme persistence errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe).
    Unavailable,
    /// Failed to write to localStorage.
    SaveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "localStorage not available"),
            Self::SaveFailed => write!(f, "failed to save to localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}
