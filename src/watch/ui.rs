//! UI rendering for watch mode

use super::state::WatchState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const HINT_COLOR: Color = Color::Rgb(128, 128, 128);

/// Render the TUI interface
pub fn ui(f: &mut Frame, state: &WatchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(5),     // Main content
            Constraint::Length(10), // Log
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    render_log(f, chunks[2], state);
    render_instructions(f, chunks[3]);
}

/// Render the title/status section
fn render_title(f: &mut Frame, area: Rect, state: &WatchState) {
    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Evclash Watch Mode",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  student {} - {}",
            state.student,
            state.catalog_path.display()
        )),
    ])])
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(title, area);
}

/// Render the main content area (events + clashes side-by-side)
fn render_main_content(f: &mut Frame, area: Rect, state: &WatchState) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_events_list(f, main_chunks[0], state);
    render_clashes(f, main_chunks[1], state);
}

/// Render the registered events list
fn render_events_list(f: &mut Frame, area: Rect, state: &WatchState) {
    let clashing = state.clashing_event_ids();

    let mut items: Vec<ListItem> = state
        .events
        .iter()
        .map(|event| {
            let slots = event
                .timeline
                .iter()
                .filter(|s| s.window().is_some())
                .count();
            let style = if clashing.contains(event.id.as_str()) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(format!("{} [{} slots]", event.title, slots)).style(style)
        })
        .collect();

    if !items.is_empty() {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                "yellow",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::DIM),
            ),
            Span::styled(" = involved in a clash", Style::default().fg(HINT_COLOR)),
        ])));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Registered events"),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(list, area);
}

/// Render the clashes display
fn render_clashes(f: &mut Frame, area: Rect, state: &WatchState) {
    let mut text = if state.clashes.is_empty() {
        vec![Line::from(Span::styled(
            "✓ No schedule clashes",
            Style::default().fg(Color::Green),
        ))]
    } else {
        let mut lines = vec![Line::from(Span::styled(
            format!("⚠ {} clash(es) detected", state.clashes.len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];

        for clash in &state.clashes {
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "{} ({}) ↔ {} ({})",
                clash.event_a.title,
                clash.event_a.timeline,
                clash.event_b.title,
                clash.event_b.timeline
            )));
            for side in [&clash.event_a, &clash.event_b] {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {}: {} → {}",
                        side.title,
                        side.starts.format("%a %d %b %H:%M"),
                        side.ends.format("%H:%M")
                    ),
                    Style::default().fg(HINT_COLOR),
                )));
            }
        }
        lines
    };

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Only published events with a dated timeline are checked",
        Style::default().fg(HINT_COLOR),
    )));

    let clashes = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Clashes"));
    f.render_widget(clashes, area);
}

/// Render the scrollable log
fn render_log(f: &mut Frame, area: Rect, state: &WatchState) {
    let available_height = area.height.saturating_sub(2) as usize; // -2 for borders
    let total = state.log.len();

    let start_idx = match state.log_scroll {
        None => total.saturating_sub(available_height),
        Some(scroll) => scroll.min(total.saturating_sub(available_height)),
    };
    let end_idx = (start_idx + available_height).min(total);

    let visible: Vec<ListItem> = state
        .log
        .iter()
        .skip(start_idx)
        .take(end_idx - start_idx)
        .map(|line| ListItem::new(line.as_str()))
        .collect();

    let title = if total > available_height {
        format!("Log [{}-{}/{}]", start_idx + 1, end_idx, total)
    } else if total == 0 {
        "Log [empty]".to_string()
    } else {
        format!("Log [{}]", total)
    };

    let log_list = List::new(visible).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(log_list, area);
}

/// Render the keyboard instructions
fn render_instructions(f: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let instructions = Paragraph::new(vec![Line::from(vec![
        Span::styled("q", key),
        Span::raw(" quit  "),
        Span::styled("r", key),
        Span::raw(" refresh  "),
        Span::styled("↑↓", key),
        Span::raw(" scroll log"),
    ])])
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(instructions, area);
}
