//! Error types for schedule operations
//!
//! The clash detector itself never fails; these errors come from loading
//! event data and looking up registrations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying event data
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog contents are not valid JSON for the expected layout
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two events share the same identifier
    #[error("Duplicate event id '{id}' in catalog")]
    DuplicateEvent { id: String },

    /// Requested event does not exist
    #[error("Event '{id}' not found")]
    EventNotFound { id: String },
}

/// Result type alias using ScheduleError
pub type Result<T> = std::result::Result<T, ScheduleError>;
