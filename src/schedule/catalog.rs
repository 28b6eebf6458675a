//! Catalog - JSON-backed collection of events, registrations and student teams

use super::error::{Result, ScheduleError};
use super::lookup::EventStore;
use super::{Event, EventStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// All event data known to the tool, loaded from a single JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub registrations: Vec<Registration>,

    #[serde(default)]
    pub teams: Vec<StudentTeam>,
}

/// A registration of a student (or a student team) for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: String,

    /// Student who registered individually
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Team that registered as a whole
    #[serde(default, alias = "teamId", skip_serializing_if = "Option::is_none")]
    pub student_team_id: Option<String>,
}

/// A student team with its leader and members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTeam {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub team_name: String,

    pub leader: String,

    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Membership entry of a student team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub member: String,

    #[serde(default)]
    pub status: MembershipStatus,
}

/// Approval state of a team membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl StudentTeam {
    /// A student belongs to a team as its leader or as an approved member
    pub fn includes(&self, student_id: &str) -> bool {
        self.leader == student_id
            || self
                .members
                .iter()
                .any(|m| m.member == student_id && m.status == MembershipStatus::Approved)
    }
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&contents)?;
        log::debug!(
            "Loaded catalog {}: {} events, {} registrations, {} teams",
            path.display(),
            catalog.events.len(),
            catalog.registrations.len(),
            catalog.teams.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text, rejecting duplicate event ids
    pub fn from_json(contents: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(contents)?;

        let mut seen = HashSet::new();
        for event in &catalog.events {
            if !seen.insert(event.id.as_str()) {
                return Err(ScheduleError::DuplicateEvent {
                    id: event.id.clone(),
                });
            }
        }

        Ok(catalog)
    }

    /// Ids of the teams the student leads or is an approved member of
    pub fn teams_of(&self, student_id: &str) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|team| team.includes(student_id))
            .map(|team| team.id.as_str())
            .collect()
    }
}

impl EventStore for Catalog {
    fn registered_event_ids(&self, student_id: &str) -> Result<Vec<String>> {
        let team_ids = self.teams_of(student_id);

        let mut seen = HashSet::new();
        let ids = self
            .registrations
            .iter()
            .filter(|r| {
                r.student_id.as_deref() == Some(student_id)
                    || r
                        .student_team_id
                        .as_deref()
                        .is_some_and(|team| team_ids.contains(&team))
            })
            .filter(|r| seen.insert(r.event_id.as_str()))
            .map(|r| r.event_id.clone())
            .collect();

        Ok(ids)
    }

    fn events_with_status(&self, ids: &[String], status: EventStatus) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.status == status && ids.contains(&e.id))
            .cloned()
            .collect())
    }

    fn event(&self, id: &str) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }
}
