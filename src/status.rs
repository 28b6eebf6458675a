use colored::Colorize;
use evclash::report::Report;
use evclash::{
    Catalog, ClashWarning, Event, EventStatus, ScheduleResult, detect_clashes, registered_events,
    student_clashes,
};
use std::collections::HashMap;

/// Format for slot boundaries in human-readable output
const SLOT_TIME_FORMAT: &str = "%a %d %b %H:%M";

/// Handles the display of registered events and their clashes
pub struct StatusDisplay<'a> {
    events: &'a [Event],
    clashes: &'a [ClashWarning],
}

impl<'a> StatusDisplay<'a> {
    /// Create a new StatusDisplay for the given events and detected clashes
    pub fn new(events: &'a [Event], clashes: &'a [ClashWarning]) -> Self {
        Self { events, clashes }
    }

    /// Run the full status display (events + clashes)
    pub fn show(&self) {
        self.show_events();
        self.show_clashes();
    }

    /// Display all registered events with their timeline
    pub fn show_events(&self) {
        println!("{}", "Registered events:".bright_cyan().bold());
        if self.events.is_empty() {
            println!("  {}", "(none)".bright_black());
        }
        for event in self.events {
            println!(
                "  {}: {}",
                event.id.bright_blue(),
                event.title.bright_white().bold()
            );
            for segment in &event.timeline {
                match segment.window() {
                    Some((from, to)) => println!(
                        "    {} {} → {}",
                        segment.label().bright_magenta(),
                        from.format(SLOT_TIME_FORMAT).to_string().white(),
                        to.format(SLOT_TIME_FORMAT).to_string().white()
                    ),
                    None => println!(
                        "    {} {}",
                        segment.label().bright_magenta(),
                        "(no schedule)".bright_black()
                    ),
                }
            }
        }
    }

    /// Display detected clashes as a matrix, a detailed list and a summary
    pub fn show_clashes(&self) {
        if self.events.len() <= 1 {
            println!(
                "\nNo possible clashes (only {} registered event)",
                self.events.len()
            );
            return;
        }

        let matrix = self.build_clash_matrix();
        self.display_clash_table(&matrix);
        self.display_detailed_clashes();
        self.display_summary();
    }

    /// Count clashing segment pairs for every pair of events
    fn build_clash_matrix(&self) -> Vec<Vec<usize>> {
        let mut matrix = vec![vec![0; self.events.len()]; self.events.len()];

        let id_to_index: HashMap<&str, usize> = self
            .events
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();

        for clash in self.clashes {
            let (Some(&i), Some(&j)) = (
                id_to_index.get(clash.event_a.event_id.as_str()),
                id_to_index.get(clash.event_b.event_id.as_str()),
            ) else {
                continue;
            };
            matrix[i][j] += 1;
            matrix[j][i] += 1;
        }

        matrix
    }

    /// Display clashes as a table/matrix
    fn display_clash_table(&self, matrix: &[Vec<usize>]) {
        let title_width = self
            .events
            .iter()
            .map(|e| e.title.chars().count())
            .max()
            .unwrap_or(10)
            .clamp(20, 30);

        // Columns are labeled by event id, which is usually short
        let col_width = self
            .events
            .iter()
            .map(|e| e.id.chars().count() + 2)
            .max()
            .unwrap_or(8)
            .clamp(8, 16);
        let total_width = title_width + 2 + (col_width + 1) * self.events.len();

        println!(
            "\n{}",
            format!("╔{:═^width$}╗", " Clash Matrix ", width = total_width)
                .bright_cyan()
                .bold()
        );

        // Column headers
        print!("{}", "║".bright_cyan());
        print!("{:width$} {}", "", "│".bright_cyan(), width = title_width);
        for event in self.events {
            let truncated = truncate(&event.id, col_width);
            print!(
                " {:^width$}",
                truncated.bright_blue().bold(),
                width = col_width
            );
        }
        println!("{}", "║".bright_cyan());

        // Separator
        print!(
            "{}",
            format!("╟{:─<width$}─┼", "", width = title_width).bright_cyan()
        );
        for _ in 0..self.events.len() {
            print!(
                "{}",
                format!("─{:─<width$}", "", width = col_width).bright_cyan()
            );
        }
        println!("{}", "╢".bright_cyan());

        // Rows
        for (i, event) in self.events.iter().enumerate() {
            print!("{}", "║".bright_cyan());
            print!(
                "{:width$} {}",
                truncate(&event.title, title_width).bright_magenta().bold(),
                "│".bright_cyan(),
                width = title_width
            );
            for (j, &count) in matrix[i].iter().enumerate() {
                if i == j {
                    print!(" {:^width$}", "-".bright_black(), width = col_width);
                } else if count == 0 {
                    print!(
                        " {:^width$}",
                        "OK".bright_green().bold(),
                        width = col_width
                    );
                } else {
                    let display = if count == 1 {
                        count.to_string().bright_yellow().bold()
                    } else {
                        count.to_string().bright_red().bold()
                    };
                    print!(" {:^width$}", display, width = col_width);
                }
            }
            println!("{}", "║".bright_cyan());
        }

        println!(
            "{}",
            format!("╚{:═<width$}╝", "", width = total_width)
                .bright_cyan()
                .bold()
        );
    }

    /// Display every clash with both time windows
    fn display_detailed_clashes(&self) {
        println!("\n{}", "Detailed clashes:".bright_cyan().bold());

        if self.clashes.is_empty() {
            println!("  {} {}", "✓".bright_green().bold(), "No clashes".green());
            return;
        }

        for clash in self.clashes {
            println!("  {}", clash.message.bright_yellow().bold());
            for side in [&clash.event_a, &clash.event_b] {
                println!(
                    "    {} {} ({}): {} → {}",
                    "→".bright_red(),
                    side.title.bright_magenta(),
                    side.timeline.yellow(),
                    side.starts.format(SLOT_TIME_FORMAT),
                    side.ends.format(SLOT_TIME_FORMAT)
                );
            }
        }
    }

    /// Display summary statistics
    fn display_summary(&self) {
        let slot_count: usize = self
            .events
            .iter()
            .map(|e| e.timeline.iter().filter(|s| s.window().is_some()).count())
            .sum();

        print!("\n{}: ", "Summary".bright_cyan().bold());
        print!(
            "Checked {} event{} ({} time slot{}), ",
            self.events.len().to_string().bright_blue().bold(),
            if self.events.len() == 1 { "" } else { "s" },
            slot_count,
            if slot_count == 1 { "" } else { "s" }
        );

        let total = self.clashes.len();
        if total == 0 {
            println!("found {} clashes ✅", "no".bright_green().bold());
        } else {
            let total_colored = if total == 1 {
                total.to_string().bright_yellow().bold()
            } else {
                total.to_string().bright_red().bold()
            };
            println!(
                "found {} clash{}",
                total_colored,
                if total == 1 { "" } else { "es" }
            );
        }
    }
}

/// Truncate a label to fit in a column, counting characters
fn truncate(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let kept: String = label.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Run the status command - shows registered events and their clashes.
///
/// Returns false if the lookup failed (caller should exit with code 1).
pub fn run_status(catalog: ScheduleResult<Catalog>, student: &str, json: bool) -> bool {
    if json {
        let report = Report::clashes(catalog.and_then(|c| student_clashes(&c, student)));

        match serde_json::to_string_pretty(&report) {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return report.success;
    }

    let events = catalog.and_then(|c| registered_events(&c, student, EventStatus::Published));
    match events {
        Ok(events) => {
            let clashes = detect_clashes(&events);
            let report = Report::clashes(Ok(clashes));

            StatusDisplay::new(&events, &report.data).show();
            println!("{}", report.message.bright_white());
            true
        }
        Err(e) => {
            let report = Report::clashes(Err(e));
            eprintln!("{}", report.message.red().bold());
            if let Some(cause) = report.error {
                eprintln!("Error: {}", cause);
            }
            false
        }
    }
}
