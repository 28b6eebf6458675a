//! Application state for watch mode

use evclash::{Catalog, ClashWarning, Event, EventStatus, detect_clashes, registered_events};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

/// Maximum number of log lines to keep in memory
const MAX_LOG_LINES: usize = 1000;

/// Watch mode application state
pub struct WatchState {
    pub catalog_path: PathBuf,
    pub student: String,
    pub events: Vec<Event>,
    pub clashes: Vec<ClashWarning>,
    pub log: VecDeque<String>,
    pub log_scroll: Option<usize>, // None = stick to bottom, Some(n) = show from line n
}

impl WatchState {
    /// Create WatchState and run the first clash check
    pub fn new(catalog_path: PathBuf, student: String) -> Self {
        let mut state = Self {
            catalog_path,
            student,
            events: Vec::new(),
            clashes: Vec::new(),
            log: VecDeque::with_capacity(MAX_LOG_LINES),
            log_scroll: None,
        };

        state.add_log("Watch mode started".to_string());
        match state.refresh_clashes() {
            Ok(()) => state.add_log(format!(
                "Found {} registered events for {}",
                state.events.len(),
                state.student
            )),
            Err(e) => state.add_log(format!("Initial load failed: {}", e)),
        }

        state
    }

    pub fn add_log(&mut self, line: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.log.push_back(format!("[{}] {}", timestamp, line));

        // Remove oldest lines if we exceed the limit
        while self.log.len() > MAX_LOG_LINES {
            self.log.pop_front();
            if let Some(scroll) = self.log_scroll
                && scroll > 0
            {
                self.log_scroll = Some(scroll.saturating_sub(1));
            }
        }
    }

    /// Reload the catalog and re-run clash detection
    ///
    /// On failure the previous events and clashes stay on screen.
    pub fn refresh_clashes(&mut self) -> Result<(), String> {
        let catalog = Catalog::load(&self.catalog_path).map_err(|e| e.to_string())?;
        let events = registered_events(&catalog, &self.student, EventStatus::Published)
            .map_err(|e| e.to_string())?;

        self.clashes = detect_clashes(&events);
        self.events = events;
        Ok(())
    }

    /// Ids of events involved in at least one clash
    pub fn clashing_event_ids(&self) -> HashSet<&str> {
        self.clashes
            .iter()
            .flat_map(|c| [c.event_a.event_id.as_str(), c.event_b.event_id.as_str()])
            .collect()
    }

    /// One-line description of the current state, used in refresh log lines
    pub fn summary(&self) -> String {
        if self.clashes.is_empty() {
            format!("{} events, no clashes", self.events.len())
        } else {
            format!(
                "{} events, {} clashes affecting {} events",
                self.events.len(),
                self.clashes.len(),
                self.clashing_event_ids().len()
            )
        }
    }
}
