//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let heading = |h: &'static str| {
        Line::from(Span::styled(h, Style::default().add_modifier(Modifier::BOLD)))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "DASHBOARD HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        heading("Employees"),
        Line::raw(""),
        Line::from(vec![key("  ↑/↓ j/k  "), Span::raw("Select employee")]),
        Line::from(vec![key("  A        "), Span::raw("Add a new employee")]),
        Line::from(vec![key("  E, Enter "), Span::raw("Edit selected employee")]),
        Line::from(vec![key("  D, Del   "), Span::raw("Delete selected employee")]),
        Line::raw(""),
        heading("Form"),
        Line::raw(""),
        Line::from(vec![key("  Tab      "), Span::raw("Switch between Name and Rating")]),
        Line::from(vec![key("  Enter    "), Span::raw("Add / update employee")]),
        Line::from(vec![key("  Esc      "), Span::raw("Cancel and clear the form")]),
        Line::raw(""),
        heading("General"),
        Line::raw(""),
        Line::from(vec![key("  R        "), Span::raw("Reload all data (discards local edits)")]),
        Line::from(vec![key("  Q, Esc   "), Span::raw("Quit")]),
        Line::from(vec![key("  ?        "), Span::raw("Toggle this help")]),
        Line::raw(""),
        Line::from(Span::styled(
            "Edits stay on this screen only; the server is never changed.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
