//! Event loop and application orchestration

use super::{state::WatchState, ui, watcher};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::Terminal;
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Visible lines in the log window (10 high minus 2 for borders)
const LOG_WINDOW_HEIGHT: usize = 8;

/// Run the main application event loop
pub fn run_app<B>(terminal: &mut Terminal<B>, state: &mut WatchState) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Into<io::Error>,
{
    let (tx, rx) = mpsc::channel();
    let _watcher = watcher::setup_watcher(state, tx)?;

    // Debouncing: wait for the catalog to settle before reloading it
    let mut last_change: Option<Instant> = None;
    let debounce_duration = Duration::from_secs(1);

    loop {
        // Draw UI - continue on error to prevent panic
        if let Err(e) = terminal.draw(|f| ui::ui(f, state)).map_err(Into::into) {
            state.add_log(format!("UI draw error: {} - attempting recovery", e));
        }

        // Drain file system notifications (non-blocking)
        while rx.try_recv().is_ok() {
            last_change = Some(Instant::now());
        }

        if let Some(changed_at) = last_change
            && changed_at.elapsed() > debounce_duration
        {
            match state.refresh_clashes() {
                Ok(()) => {
                    let msg = format!("Catalog changed - Refreshed: {}", state.summary());
                    state.add_log(msg);
                }
                Err(e) => state.add_log(format!("Refresh error: {}", e)),
            }
            last_change = None;
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        state.add_log("CTRL+C pressed, exiting...".to_string());
                        return Ok(());
                    }

                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('r') => match state.refresh_clashes() {
                            Ok(()) => {
                                let msg = format!("Manual refresh: {}", state.summary());
                                state.add_log(msg);
                            }
                            Err(e) => state.add_log(format!("Manual refresh error: {}", e)),
                        },
                        KeyCode::Up => {
                            let current_scroll = match state.log_scroll {
                                None => state.log.len().saturating_sub(LOG_WINDOW_HEIGHT),
                                Some(scroll) => scroll,
                            };
                            if current_scroll > 0 {
                                state.log_scroll = Some(current_scroll - 1);
                            }
                        }
                        KeyCode::Down => {
                            if let Some(scroll) = state.log_scroll {
                                let max_scroll = state.log.len().saturating_sub(LOG_WINDOW_HEIGHT);
                                if scroll < max_scroll {
                                    state.log_scroll = Some(scroll + 1);
                                } else {
                                    // Reached the bottom, switch back to auto-scroll
                                    state.log_scroll = None;
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Ok(_) => {}
                Err(e) => state.add_log(format!("Event read error: {} - continuing", e)),
            },
            Ok(false) => {}
            Err(e) => state.add_log(format!("Event poll error: {} - continuing", e)),
        }
    }
}
