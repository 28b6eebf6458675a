//! Registration lookup and the fetch wrappers around the clash detector

use super::clash::{ClashWarning, detect_clashes, detect_clashes_against};
use super::error::{Result, ScheduleError};
use super::{Event, EventStatus};
use chrono::{Days, NaiveDate};

/// Number of days ahead (inclusive) that reminders look at
pub const REMINDER_WINDOW_DAYS: u64 = 7;

/// Read access to events and registrations
///
/// Implemented by [`crate::Catalog`]; other storage backends only need to
/// answer these three queries.
pub trait EventStore {
    /// Ids of the events a student is registered for, individually or through
    /// a team they lead or are an approved member of. No duplicates.
    fn registered_event_ids(&self, student_id: &str) -> Result<Vec<String>>;

    /// Events among `ids` that are in the given state
    fn events_with_status(&self, ids: &[String], status: EventStatus) -> Result<Vec<Event>>;

    /// A single event by id
    fn event(&self, id: &str) -> Result<Option<Event>>;
}

/// Events of the given state that the student is registered for
pub fn registered_events<S: EventStore + ?Sized>(
    store: &S,
    student_id: &str,
    status: EventStatus,
) -> Result<Vec<Event>> {
    let ids = store.registered_event_ids(student_id)?;
    store.events_with_status(&ids, status)
}

/// Clashes among the published events a student is registered for
pub fn student_clashes<S: EventStore + ?Sized>(
    store: &S,
    student_id: &str,
) -> Result<Vec<ClashWarning>> {
    let events = registered_events(store, student_id, EventStatus::Published)?;
    log::debug!(
        "Checking {} registered events for student {}",
        events.len(),
        student_id
    );
    Ok(detect_clashes(&events))
}

/// Clashes a student would get by attending `event_id` on top of their
/// registered published events
pub fn candidate_clashes<S: EventStore + ?Sized>(
    store: &S,
    student_id: &str,
    event_id: &str,
) -> Result<(Event, Vec<ClashWarning>)> {
    let candidate = store
        .event(event_id)?
        .ok_or_else(|| ScheduleError::EventNotFound {
            id: event_id.to_string(),
        })?;

    let registered = registered_events(store, student_id, EventStatus::Published)?;
    let clashes = detect_clashes_against(&candidate, &registered);
    Ok((candidate, clashes))
}

/// Registered published events with a timeline segment in the coming week
///
/// A segment counts when its date, or the date its window starts on, falls
/// within `today ..= today + REMINDER_WINDOW_DAYS`.
pub fn upcoming_events<S: EventStore + ?Sized>(
    store: &S,
    student_id: &str,
    today: NaiveDate,
) -> Result<Vec<Event>> {
    let horizon = today
        .checked_add_days(Days::new(REMINDER_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let in_window = |date: NaiveDate| today <= date && date <= horizon;

    let events = registered_events(store, student_id, EventStatus::Published)?;
    Ok(events
        .into_iter()
        .filter(|event| {
            event.timeline.iter().any(|segment| {
                segment.calendar_date().is_some_and(in_window)
                    || segment
                        .window()
                        .is_some_and(|(start, _)| in_window(start.date()))
            })
        })
        .collect())
}
