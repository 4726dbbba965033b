//! Main layout orchestration.
//!
//! Renders the overall dashboard structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  EMPLOYEE PERFORMANCE DASHBOARD  api  status      [R] [Q] [?]   │
//! ├────────────────────────────────┬────────────────────────────────┤
//! │  EMPLOYEES                     │  RATING CATEGORIES             │
//! │  ...                           │  ACTUAL PERCENTAGES            │
//! │                                │  DEVIATION                     │
//! │                                │  SUGGESTED ADJUSTMENTS         │
//! ├────────────────────────────────┴────────────────────────────────┤
//! │  FORM                                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! │  [↑↓] Select  [A] Add  [E] Edit  [D] Delete  [R] Reload         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{form, tables, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, form, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(4), // Form + status line
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    form::render(frame, main_chunks[2], app);
    render_footer(frame, main_chunks[3], app);

    // Render help overlay if active
    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " EMPLOYEE PERFORMANCE DASHBOARD ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.api_url.as_str(), Style::default().fg(Color::DarkGray)),
    ];

    let status = if app.is_loading() {
        Span::styled(" Loading... ", Style::default().fg(Color::Yellow))
    } else if let Some(time) = app.last_refresh {
        Span::styled(
            format!(" Last refresh: {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" No data ", Style::default().fg(Color::DarkGray))
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("eload "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    // Calculate spacing
    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let status_len = status.content.chars().count();
    let hints_len: usize = hints.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width.saturating_sub(2) as usize)
        .saturating_sub(title_len + status_len + hints_len);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the main body (employees left, analytics right).
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    tables::render_employees(frame, body_chunks[0], app);
    tables::render_analytics(frame, body_chunks[1], app);
}

/// Render the footer with keyboard shortcuts for the current mode.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let keybinds = if app.state == AppState::Form {
        vec![
            key("[Tab]"),
            Span::raw(" Next Field  "),
            key("[Enter]"),
            Span::raw(" Submit  "),
            key("[Esc]"),
            Span::raw(" Cancel  "),
        ]
    } else {
        vec![
            key("[↑↓]"),
            Span::raw(" Select  "),
            key("[A]"),
            Span::raw(" Add  "),
            key("[E]"),
            Span::raw(" Edit  "),
            key("[D]"),
            Span::raw(" Delete  "),
            key("[R]"),
            Span::raw(" Reload  "),
        ]
    };

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
