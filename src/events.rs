use chrono::NaiveDate;
use colored::Colorize;
use evclash::report::Report;
use evclash::{
    Catalog, Event, EventStatus, ScheduleResult, TimelineSegment, registered_events,
    upcoming_events,
};

/// Run the events command - lists registered events in the given state.
///
/// Returns false if the lookup failed.
pub fn run_events(
    catalog: ScheduleResult<Catalog>,
    student: &str,
    status: EventStatus,
    json: bool,
) -> bool {
    let report = Report::registered(catalog.and_then(|c| registered_events(&c, student, status)));
    print_report(&report, json, None)
}

/// Run the reminders command - lists registered events happening in the next week.
///
/// Returns false if the lookup failed.
pub fn run_reminders(
    catalog: ScheduleResult<Catalog>,
    student: &str,
    today: NaiveDate,
    json: bool,
) -> bool {
    let report = Report::upcoming(catalog.and_then(|c| upcoming_events(&c, student, today)));
    print_report(&report, json, Some(today))
}

/// Print an event listing as JSON or as a colored list
///
/// With `from` set, only timeline entries on or after that date are shown.
fn print_report(report: &Report<Event>, json: bool, from: Option<NaiveDate>) -> bool {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return report.success;
    }

    if !report.success {
        eprintln!("{}", report.message.red().bold());
        if let Some(cause) = &report.error {
            eprintln!("Error: {}", cause);
        }
        return false;
    }

    println!("{}", report.message.bright_cyan().bold());
    for event in &report.data {
        println!(
            "  {}: {} [{}]",
            event.id.bright_blue(),
            event.title.bright_white().bold(),
            event.status
        );
        for segment in &event.timeline {
            if !shown_from(segment, from) {
                continue;
            }
            let when = match segment.window() {
                Some((start, end)) => format!(
                    "{} → {}",
                    start.format("%a %d %b %H:%M"),
                    end.format("%H:%M")
                ),
                None => "(no schedule)".to_string(),
            };
            println!("    {} {}", segment.label().bright_magenta(), when);
        }
    }
    true
}

/// Whether a timeline entry is still relevant on or after `from`
///
/// Entries with no date at all are always shown.
fn shown_from(segment: &TimelineSegment, from: Option<NaiveDate>) -> bool {
    let date = segment
        .window()
        .map(|(start, _)| start.date())
        .or_else(|| segment.calendar_date());
    match (from, date) {
        (Some(from), Some(date)) => date >= from,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(json: &str) -> TimelineSegment {
        serde_json::from_str(json).unwrap()
    }

    fn day(s: &str) -> Option<NaiveDate> {
        Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    #[test]
    fn entries_before_the_reference_day_are_hidden() {
        let past = segment(r#"{"date": "2026-10-15", "duration": {"from": "10:00", "to": "11:00"}}"#);
        assert!(!shown_from(&past, day("2026-10-16")));

        let same_day = segment(r#"{"date": "2026-10-16", "duration": {"from": "23:00", "to": "01:00"}}"#);
        assert!(shown_from(&same_day, day("2026-10-16")));
        assert!(shown_from(&segment(r#"{"date": "2026-10-20"}"#), day("2026-10-16")));
    }

    #[test]
    fn undated_entries_and_unfiltered_listings_show_everything() {
        assert!(shown_from(&segment(r#"{"title": "TBA"}"#), day("2026-10-16")));

        let past = segment(r#"{"date": "2026-01-01"}"#);
        assert!(!shown_from(&past, day("2026-10-16")));
        assert!(shown_from(&past, None));
    }

    #[test]
    fn window_start_wins_over_the_calendar_date() {
        let early = segment(
            r#"{"date": "2026-10-20", "duration": {"from": "2026-10-14T09:00:00", "to": "2026-10-14T10:00:00"}}"#,
        );
        assert!(!shown_from(&early, day("2026-10-16")));
    }
}
