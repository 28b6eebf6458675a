//! Schedule slots built from event timelines
//!
//! A slot is the concrete `[from, to)` window of one timeline segment, tagged
//! with the event it belongs to. Segments that cannot be resolved to a window
//! produce no slot.

use super::{DEFAULT_TIMELINE_TITLE, Event, EventRef, TimelineSegment};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time window of one timeline segment, owned by an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    #[serde(flatten)]
    pub event: EventRef,
    pub timeline_title: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl ScheduleSlot {
    /// Build the slot for a segment of `event`, if the segment has a usable window
    pub fn from_segment(event: &Event, segment: &TimelineSegment) -> Option<Self> {
        let (from, to) = segment.window()?;
        Some(Self {
            event: event.event_ref(),
            timeline_title: segment.label().to_string(),
            from,
            to,
        })
    }
}

// ScheduleSlot overlap methods live in clash.rs

/// Flatten all events' timelines into slots, in event then segment order
pub fn collect_slots(events: &[Event]) -> Vec<ScheduleSlot> {
    let mut slots = Vec::new();

    for event in events {
        for segment in &event.timeline {
            match ScheduleSlot::from_segment(event, segment) {
                Some(slot) => slots.push(slot),
                None => log::debug!(
                    "Skipping segment '{}' of '{}': no usable duration",
                    segment.label(),
                    event.title
                ),
            }
        }
    }

    slots
}

/// One end of a segment duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    /// Wall-clock time, needs the segment date
    TimeOfDay(NaiveTime),
    /// Complete date and time
    Instant(NaiveDateTime),
}

impl TimelineSegment {
    /// Display label, falling back to [`DEFAULT_TIMELINE_TITLE`] when blank
    pub fn label(&self) -> &str {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TIMELINE_TITLE,
        }
    }

    /// Calendar date of the segment, if present and parseable
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Resolve the segment's `[from, to)` window
    ///
    /// Returns `None` when the duration is missing, either end is unparseable,
    /// a time of day has no date to attach to, or the window ends before it
    /// starts. When both ends are times of day and `to` is earlier than
    /// `from`, the segment runs past midnight and `to` moves to the next day.
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let duration = self.duration.as_ref()?;
        let from = parse_endpoint(duration.from.as_deref()?)?;
        let to = parse_endpoint(duration.to.as_deref()?)?;

        let (start, end) = match (from, to) {
            (Endpoint::TimeOfDay(from), Endpoint::TimeOfDay(to)) => {
                let date = self.calendar_date()?;
                let start = date.and_time(from);
                let mut end = date.and_time(to);
                if end < start {
                    end = end.checked_add_days(Days::new(1))?;
                }
                (start, end)
            }
            (from, to) => (self.resolve(from)?, self.resolve(to)?),
        };

        (start <= end).then_some((start, end))
    }

    fn resolve(&self, endpoint: Endpoint) -> Option<NaiveDateTime> {
        match endpoint {
            Endpoint::Instant(instant) => Some(instant),
            Endpoint::TimeOfDay(time) => self.calendar_date().map(|date| date.and_time(time)),
        }
    }
}

// ============================================================================
// Parsing helpers (private to this module)
// ============================================================================

/// Parse `YYYY-MM-DD`, or take the calendar date of an RFC 3339 timestamp
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Parse a duration end as a time of day or a full date-time
///
/// Timestamps with an offset are normalized to UTC; naive date-times are
/// taken as already being on the common wall clock.
fn parse_endpoint(raw: &str) -> Option<Endpoint> {
    let raw = raw.trim();

    for format in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(raw, format) {
            return Some(Endpoint::TimeOfDay(time));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Endpoint::Instant(dt.naive_utc()));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Endpoint::Instant(dt));
        }
    }

    None
}
