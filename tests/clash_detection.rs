use evclash::report::{NO_CLASHES_MESSAGE, Report};
use evclash::{Catalog, ScheduleError, candidate_clashes, student_clashes};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const STUDENT: &str = "stu-1";
const DAY: &str = "2026-09-18";

fn segment(title: &str, from: &str, to: &str) -> serde_json::Value {
    json!({"title": title, "date": DAY, "duration": {"from": from, "to": to}})
}

fn published(id: &str, title: &str, timeline: Vec<serde_json::Value>) -> serde_json::Value {
    json!({"id": id, "title": title, "status": "published", "timeline": timeline})
}

/// Write a catalog where STUDENT is registered for every given event
fn catalog_file(events: Vec<serde_json::Value>) -> NamedTempFile {
    let registrations: Vec<_> = events
        .iter()
        .map(|e| json!({"eventId": e["id"], "studentId": STUDENT}))
        .collect();
    let doc = json!({"events": events, "registrations": registrations, "teams": []});

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(doc.to_string().as_bytes()).unwrap();
    file
}

fn clashes_for(events: Vec<serde_json::Value>) -> Report<evclash::ClashWarning> {
    let file = catalog_file(events);
    let catalog = Catalog::load(file.path()).unwrap();
    Report::clashes(student_clashes(&catalog, STUDENT))
}

#[test]
fn overlapping_morning_events_clash_once() {
    let report = clashes_for(vec![
        published("a", "Morning Keynote", vec![segment("Keynote", "10:00", "12:00")]),
        published("b", "Workshop", vec![segment("Hands-on", "11:00", "13:00")]),
    ]);

    assert!(report.success);
    assert_eq!(report.count, 1);
    assert_eq!(report.message, "Warning: 1 schedule clash(es) detected.");
    let message = &report.data[0].message;
    assert!(message.contains("CLASH DETECTED"));
    assert!(message.contains("Morning Keynote") && message.contains("Workshop"));
    assert!(message.contains("Keynote") && message.contains("Hands-on"));
}

#[test]
fn separate_events_report_no_clashes() {
    let report = clashes_for(vec![
        published("a", "Morning Keynote", vec![segment("Keynote", "10:00", "11:00")]),
        published("b", "Workshop", vec![segment("Hands-on", "12:00", "13:00")]),
    ]);

    assert!(report.success);
    assert_eq!(report.count, 0);
    assert_eq!(report.message, NO_CLASHES_MESSAGE);
    assert_eq!(
        report.message,
        "No schedule clashes found in your registered events."
    );
}

#[test]
fn segments_of_one_event_never_clash() {
    let report = clashes_for(vec![published(
        "a",
        "Hackathon",
        vec![
            segment("Day 1", "09:00", "17:00"),
            segment("Day 1 (duplicate)", "09:00", "17:00"),
        ],
    )]);
    assert_eq!(report.count, 0);
}

#[test]
fn chained_overlaps_are_reported_pairwise() {
    let report = clashes_for(vec![
        published("a", "A", vec![segment("", "09:00", "11:00")]),
        published("b", "B", vec![segment("", "10:00", "13:00")]),
        published("c", "C", vec![segment("", "12:00", "14:00")]),
    ]);

    assert_eq!(report.count, 2);
    let pairs: Vec<_> = report
        .data
        .iter()
        .map(|c| (c.event_a.title.as_str(), c.event_b.title.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    assert!(report.data.iter().all(|c| c.event_a.timeline == "Event Period"));
}

#[test]
fn team_registration_counts_for_approved_members() {
    let doc = json!({
        "events": [
            published("a", "Solo Talk", vec![segment("Talk", "10:00", "11:00")]),
            published("b", "Team Hack", vec![segment("Hack", "10:30", "12:00")]),
        ],
        "registrations": [
            {"eventId": "a", "studentId": STUDENT},
            {"eventId": "b", "studentTeamId": "team-1"},
        ],
        "teams": [
            {"id": "team-1", "teamName": "Overlappers", "leader": "stu-9",
             "members": [{"member": STUDENT, "status": "Approved"},
                         {"member": "stu-2", "status": "Pending"}]}
        ]
    });
    let catalog = Catalog::from_json(&doc.to_string()).unwrap();

    assert_eq!(student_clashes(&catalog, STUDENT).unwrap().len(), 1);
    assert!(student_clashes(&catalog, "stu-2").unwrap().is_empty());
    assert!(student_clashes(&catalog, "stu-9").unwrap().is_empty());
}

#[test]
fn draft_events_and_undated_segments_are_ignored() {
    let doc = json!({
        "events": [
            published("a", "Talk", vec![segment("Talk", "10:00", "11:00")]),
            {"id": "b", "title": "Draft", "status": "draft",
             "timeline": [segment("Draft slot", "10:00", "11:00")]},
            published("c", "Undated", vec![json!({"title": "TBA", "duration": {"from": "10:00", "to": "11:00"}})]),
            published("d", "No duration", vec![json!({"title": "Soon", "date": DAY})]),
        ],
        "registrations": [
            {"eventId": "a", "studentId": STUDENT},
            {"eventId": "b", "studentId": STUDENT},
            {"eventId": "c", "studentId": STUDENT},
            {"eventId": "d", "studentId": STUDENT},
        ]
    });
    let catalog = Catalog::from_json(&doc.to_string()).unwrap();
    assert!(student_clashes(&catalog, STUDENT).unwrap().is_empty());
}

#[test]
fn candidate_check_reports_registered_conflicts() {
    let doc = json!({
        "events": [
            published("a", "Talk", vec![segment("Talk", "10:00", "11:00")]),
            published("x", "Open Lab", vec![segment("Lab", "10:30", "10:45")]),
        ],
        "registrations": [{"eventId": "a", "studentId": STUDENT}]
    });
    let catalog = Catalog::from_json(&doc.to_string()).unwrap();

    let (event, clashes) = candidate_clashes(&catalog, STUDENT, "x").unwrap();
    assert_eq!(event.title, "Open Lab");
    assert_eq!(clashes.len(), 1);
    assert_eq!(clashes[0].event_b.title, "Talk");

    assert!(matches!(
        candidate_clashes(&catalog, STUDENT, "nope"),
        Err(ScheduleError::EventNotFound { .. })
    ));
}

#[test]
fn missing_catalog_file_is_a_failed_report() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ScheduleError::Io { .. })));

    let report = Report::clashes(result.and_then(|c| student_clashes(&c, STUDENT)));
    assert!(!report.success);
    assert!(report.error.unwrap().contains("missing.json"));
}

#[test]
fn demo_catalog_hackathon_clashes_with_the_morning_schedule() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/events.json");
    let catalog = Catalog::load(path).unwrap();

    assert_eq!(student_clashes(&catalog, STUDENT).unwrap().len(), 1);

    let (event, clashes) = candidate_clashes(&catalog, STUDENT, "hackathon").unwrap();
    assert_eq!(event.title, "All Day Hackathon");
    let against: Vec<_> = clashes.iter().map(|c| c.event_b.title.as_str()).collect();
    assert_eq!(against, vec!["Morning Keynote", "Rust Workshop", "Rust Workshop"]);
    assert!(clashes.iter().all(|c| c.event_a.timeline == "Hacking"));
}
