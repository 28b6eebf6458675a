//! Event schedules and clash detection
//!
//! This module holds the event data model (events and their timeline segments),
//! turns segments into concrete time slots, and detects overlapping slots
//! between different events. Event data comes from an [`EventStore`], with
//! [`Catalog`] as the JSON-file backed implementation.

mod catalog;
mod clash;
mod error;
mod lookup;
mod slot;

pub use catalog::{Catalog, MembershipStatus, Registration, StudentTeam, TeamMember};
pub use clash::{ClashSide, ClashWarning, detect_clashes, detect_clashes_against};
pub use error::{Result as ScheduleResult, ScheduleError};
pub use lookup::{
    EventStore, REMINDER_WINDOW_DAYS, candidate_clashes, registered_events, student_clashes,
    upcoming_events,
};
pub use slot::{ScheduleSlot, collect_slots};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Label used for timeline segments without a title of their own
pub const DEFAULT_TIMELINE_TITLE: &str = "Event Period";

/// An event document with its timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of the event
    #[serde(alias = "_id")]
    pub id: String,

    /// Display title (e.g., "Hack the Campus")
    pub title: String,

    /// Publication state
    #[serde(default)]
    pub status: EventStatus,

    /// Ordered timeline segments; a null or non-array value reads as empty
    #[serde(default, deserialize_with = "lenient_timeline")]
    pub timeline: Vec<TimelineSegment>,
}

impl Event {
    /// Reference to this event as carried by slots and warnings
    pub fn event_ref(&self) -> EventRef {
        EventRef {
            event_id: self.id.clone(),
            event_title: self.title.clone(),
        }
    }
}

/// Publication state of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Still being prepared by organizers
    #[default]
    Draft,

    /// Open and visible to students
    Published,

    /// Already took place
    Completed,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EventStatus::Draft => write!(f, "draft"),
            EventStatus::Published => write!(f, "published"),
            EventStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One entry of an event timeline
///
/// `date` and `duration` are kept as the raw strings found in the document.
/// Values of the wrong JSON type are read as absent, so a single malformed
/// segment never rejects the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<SegmentDuration>,
}

// TimelineSegment methods are extended in slot.rs (label, window, calendar_date)

/// Start and end of a timeline segment
///
/// Each end is either a time of day (`HH:MM`) resolved against the segment
/// date, or a full date-time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDuration {
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub to: Option<String>,
}

/// Identity of the event a slot belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub event_id: String,
    pub event_title: String,
}

/// Deserialize a field as `Some` only when it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a timeline, keeping only the entries shaped like segments
fn lenient_timeline<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<TimelineSegment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_reads_wrongly_typed_duration_as_absent() {
        let segment: TimelineSegment =
            serde_json::from_str(r#"{"title": "Finals", "duration": "all day"}"#).unwrap();
        assert_eq!(segment.title.as_deref(), Some("Finals"));
        assert!(segment.duration.is_none());
    }

    #[test]
    fn segment_reads_null_and_numeric_ends_as_absent() {
        let segment: TimelineSegment = serde_json::from_str(
            r#"{"date": null, "duration": {"from": 1000, "to": "12:00"}}"#,
        )
        .unwrap();
        assert!(segment.date.is_none());
        let duration = segment.duration.unwrap();
        assert!(duration.from.is_none());
        assert_eq!(duration.to.as_deref(), Some("12:00"));
    }

    #[test]
    fn event_accepts_document_style_id_and_defaults() {
        let event: Event = serde_json::from_str(r#"{"_id": "e1", "title": "Expo"}"#).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.status, EventStatus::Draft);
        assert!(event.timeline.is_empty());
    }

    #[test]
    fn event_reads_null_or_non_array_timeline_as_empty() {
        let event: Event =
            serde_json::from_str(r#"{"id": "c", "title": "Expo", "timeline": null}"#).unwrap();
        assert!(event.timeline.is_empty());

        let event: Event =
            serde_json::from_str(r#"{"id": "c", "title": "Expo", "timeline": "soon"}"#).unwrap();
        assert!(event.timeline.is_empty());
    }

    #[test]
    fn timeline_drops_entries_that_are_not_segments() {
        let event: Event = serde_json::from_str(
            r#"{"id": "c", "title": "Expo", "timeline": [42, {"title": "Opening"}]}"#,
        )
        .unwrap();
        assert_eq!(event.timeline.len(), 1);
        assert_eq!(event.timeline[0].title.as_deref(), Some("Opening"));
    }

    #[test]
    fn segment_reads_wrongly_typed_title_as_absent() {
        let segment: TimelineSegment = serde_json::from_str(
            r#"{"title": 7, "date": "2026-05-01", "duration": {"from": "10:00", "to": "11:00"}}"#,
        )
        .unwrap();
        assert!(segment.title.is_none());
        assert_eq!(segment.label(), DEFAULT_TIMELINE_TITLE);
        assert_eq!(segment.date.as_deref(), Some("2026-05-01"));
    }
}
