use evclash::{ClashWarning, EventStore, ScheduleResult, candidate_clashes};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    event: String,
    title: String,
    has_clash: bool,
    /// Titles of the registered events it clashes with, without repeats
    events: Vec<String>,
    clashes: Vec<ClashWarning>,
}

/// Run the check command - checks one event against the student's schedule.
///
/// Returns true if clashes were found (caller should exit with code 2).
pub fn run_check<S: EventStore>(store: &S, student: &str, event_id: &str) -> ScheduleResult<bool> {
    let (candidate, clashes) = candidate_clashes(store, student, event_id)?;

    let mut events: Vec<String> = Vec::new();
    for clash in &clashes {
        if !events.contains(&clash.event_b.title) {
            events.push(clash.event_b.title.clone());
        }
    }

    let has_clash = !clashes.is_empty();

    let output = CheckOutput {
        event: candidate.id,
        title: candidate.title,
        has_clash,
        events,
        clashes,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }

    Ok(has_clash)
}
