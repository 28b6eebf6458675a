//! Response envelopes
//!
//! Every query answers with the same shape: a success flag, a friendly
//! message, a count and the data itself. Failed lookups keep the shape,
//! with `success: false` and the cause in `error`.

use crate::schedule::{ClashWarning, Event, ScheduleResult};
use serde::{Deserialize, Serialize};

pub const NO_CLASHES_MESSAGE: &str = "No schedule clashes found in your registered events.";
pub const CLASH_FAILURE_MESSAGE: &str = "Server error while detecting schedule clashes.";
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming events found for this week.";
pub const REGISTERED_MESSAGE: &str = "Successfully fetched registered events.";

/// Uniform response for list-returning queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report<T> {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Report<T> {
    fn ok(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: data.len(),
            data,
            error: None,
        }
    }

    fn failed(message: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            count: 0,
            data: Vec::new(),
            error: Some(cause.to_string()),
        }
    }
}

impl Report<ClashWarning> {
    /// Shape the outcome of a clash check
    pub fn clashes(result: ScheduleResult<Vec<ClashWarning>>) -> Self {
        match result {
            Ok(clashes) if clashes.is_empty() => Self::ok(NO_CLASHES_MESSAGE, clashes),
            Ok(clashes) => Self::ok(
                format!("Warning: {} schedule clash(es) detected.", clashes.len()),
                clashes,
            ),
            Err(e) => Self::failed(CLASH_FAILURE_MESSAGE, e),
        }
    }
}

impl Report<Event> {
    /// Shape a listing of registered events, published or completed alike
    pub fn registered(result: ScheduleResult<Vec<Event>>) -> Self {
        match result {
            Ok(events) => Self::ok(REGISTERED_MESSAGE, events),
            Err(e) => Self::failed("Server error while fetching registered events.", e),
        }
    }

    /// Shape the upcoming-week reminder listing
    pub fn upcoming(result: ScheduleResult<Vec<Event>>) -> Self {
        match result {
            Ok(events) if events.is_empty() => Self::ok(NO_UPCOMING_MESSAGE, events),
            Ok(events) => Self::ok("Successfully fetched upcoming events.", events),
            Err(e) => Self::failed("Server error while fetching upcoming events.", e),
        }
    }
}
