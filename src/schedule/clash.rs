//! Clash detection methods for ScheduleSlot and event lists
//!
//! This module extends ScheduleSlot with overlap checks and provides the
//! pairwise scan that turns overlapping slots of different events into
//! warnings.

use super::Event;
use super::slot::{ScheduleSlot, collect_slots};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One side of a clash: which event and which part of its timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashSide {
    pub event_id: String,
    pub title: String,
    pub timeline: String,
    pub starts: NaiveDateTime,
    pub ends: NaiveDateTime,
}

impl From<&ScheduleSlot> for ClashSide {
    fn from(slot: &ScheduleSlot) -> Self {
        Self {
            event_id: slot.event.event_id.clone(),
            title: slot.event.event_title.clone(),
            timeline: slot.timeline_title.clone(),
            starts: slot.from,
            ends: slot.to,
        }
    }
}

/// Two timeline segments of different events that overlap in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashWarning {
    pub event_a: ClashSide,
    pub event_b: ClashSide,
    pub message: String,
}

impl ClashWarning {
    /// Build the warning for a clashing pair of slots
    pub fn between(a: &ScheduleSlot, b: &ScheduleSlot) -> Self {
        let message = format!(
            "⚠️ CLASH DETECTED: '{}' ({}) overlaps with '{}' ({}).",
            a.event.event_title, a.timeline_title, b.event.event_title, b.timeline_title
        );

        Self {
            event_a: ClashSide::from(a),
            event_b: ClashSide::from(b),
            message,
        }
    }
}

// ============================================================================
// ScheduleSlot clash methods
// ============================================================================

impl ScheduleSlot {
    /// Half-open overlap test; slots that only touch do not overlap
    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        self.from < other.to && other.from < self.to
    }

    /// Overlapping slots clash only when they belong to different events
    pub fn clashes_with(&self, other: &ScheduleSlot) -> bool {
        self.event.event_id != other.event.event_id && self.overlaps(other)
    }
}

// ============================================================================
// Event list scans
// ============================================================================

/// Find every clash between timeline segments of different events
///
/// Warnings come out in the order the pairwise scan discovers them.
pub fn detect_clashes(events: &[Event]) -> Vec<ClashWarning> {
    let slots = collect_slots(events);
    log::debug!(
        "Collected {} slots: {:?}",
        slots.len(),
        slots
            .iter()
            .map(|s| format!("{} [{} - {}]", s.event.event_title, s.from, s.to))
            .collect::<Vec<_>>()
    );

    let mut clashes = Vec::new();
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            if slots[i].clashes_with(&slots[j]) {
                clashes.push(ClashWarning::between(&slots[i], &slots[j]));
            }
        }
    }

    log::info!("Total clashes found: {}", clashes.len());
    clashes
}

/// Find clashes between `candidate` and a set of other events
///
/// Clashes among `others` themselves are not reported, and any entry of
/// `others` with the candidate's id is ignored. The candidate is always
/// `event_a`.
pub fn detect_clashes_against(candidate: &Event, others: &[Event]) -> Vec<ClashWarning> {
    let candidate_slots = collect_slots(std::slice::from_ref(candidate));
    let other_slots: Vec<ScheduleSlot> = collect_slots(others)
        .into_iter()
        .filter(|slot| slot.event.event_id != candidate.id)
        .collect();

    let mut clashes = Vec::new();
    for own in &candidate_slots {
        for other in &other_slots {
            if own.clashes_with(other) {
                clashes.push(ClashWarning::between(own, other));
            }
        }
    }

    log::info!(
        "Found {} clashes for candidate '{}'",
        clashes.len(),
        candidate.title
    );
    clashes
}
