//! Employee form bar.
//!
//! ```text
//! ┌ Add Employee ─────────────────────────────────────────────┐
//! │ Name: [Bob_______]  Rating: [B___]   [Enter] Add Employee  │
//! └───────────────────────────────────────────────────────────┘
//!   ✔ Added employee 9
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState, FormField};

/// Render the form and the status line below it.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    render_inputs(frame, chunks[0], app);
    render_status(frame, chunks[1], app);
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let active = app.state == AppState::Form;

    let field_style = |field: FormField| {
        if active && form.focus() == field {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let cursor = |field: FormField| if active && form.focus() == field { "_" } else { "" };

    let line = Line::from(vec![
        Span::raw(" Name: "),
        Span::styled(
            format!("[{}{}]", form.name, cursor(FormField::Name)),
            field_style(FormField::Name),
        ),
        Span::raw("  Rating: "),
        Span::styled(
            format!("[{}{}]", form.rating, cursor(FormField::Rating)),
            field_style(FormField::Rating),
        ),
        Span::raw("   "),
        Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
        Span::styled(
            form.submit_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let border_color = if active { Color::Cyan } else { Color::DarkGray };
    let title = match form.editing() {
        Some(id) => format!(" Update Employee #{} ", id),
        None => " Add Employee ".to_string(),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.status else {
        return;
    };

    let (marker, color) = if status.is_error {
        ("✘", Color::Red)
    } else {
        ("✔", Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::styled(status.text.as_str(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
