//! Table sections of the dashboard.
//!
//! ```text
//! ┌ Employees [3] ──────────┐┌ Rating Categories ─────┐
//! │ ID  Name       Rating   ││ Category  Standard     │
//! │ 1   Ann Lee    A        ││ A         20.00%       │
//! │ ...                     │└────────────────────────┘
//! │                         │┌ Actual Percentages ────┐
//! │                         │ ...
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::CategoryFigures;
use crate::domain::{App, AppState, Remote};

use super::format;

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn section_block<T>(name: &str, remote: &Remote<T>) -> Block<'static> {
    let title_color = if remote.error().is_some() {
        Color::Red
    } else {
        Color::Cyan
    };
    Block::default()
        .title(format::section_title(name, remote))
        .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Render the editable employee table with the cursor row highlighted.
pub fn render_employees(frame: &mut Frame, area: Rect, app: &App) {
    let name = format!("Employees [{}]", app.roster.len());
    let block = section_block(&name, &app.roster_status);

    let editing = app.form.editing();
    let rows: Vec<Row> = app
        .roster
        .employees()
        .iter()
        .map(|emp| {
            let row = Row::new(format::employee_cells(emp));
            if editing == Some(emp.id) {
                row.style(Style::default().fg(Color::Magenta))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(10),
    ];

    let highlight = if app.state == AppState::Form {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, widths)
        .header(Row::new(vec!["ID", "Name", "Rating"]).style(header_style()))
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.roster.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the right-hand column: categories, percentages, deviations, suggestions.
pub fn render_analytics(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    render_categories(frame, chunks[0], app);
    render_figures(
        frame,
        chunks[1],
        "Actual Percentages",
        "Actual Percentage",
        &app.actual,
    );
    render_figures(
        frame,
        chunks[2],
        "Deviation (Actual - Standard)",
        "Deviation",
        &app.deviations,
    );
    render_suggestions(frame, chunks[3], app);
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .categories
        .data()
        .map(|cats| {
            cats.iter()
                .map(|c| Row::new(format::category_cells(c)))
                .collect()
        })
        .unwrap_or_default();

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(20)])
        .header(Row::new(vec!["Category", "Standard Percentage"]).style(header_style()))
        .block(section_block("Rating Categories", &app.categories));

    frame.render_widget(table, area);
}

fn render_figures(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value_header: &'static str,
    figures: &Remote<CategoryFigures>,
) {
    let rows: Vec<Row> = figures
        .data()
        .map(|f| format::figure_cells(f).into_iter().map(Row::new).collect())
        .unwrap_or_default();

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(20)])
        .header(Row::new(vec!["Category", value_header]).style(header_style()))
        .block(section_block(title, figures));

    frame.render_widget(table, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block("Suggested Adjustments", &app.suggestions);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Pending and failed states are shown in the block title only
    let Some(suggestions) = app.suggestions.data() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let summary = Paragraph::new(Line::from(Span::styled(
        format::suggestions_summary(suggestions.len()),
        Style::default().fg(Color::White),
    )));
    frame.render_widget(summary, chunks[0]);

    if suggestions.is_empty() {
        return;
    }

    let rows: Vec<Row> = suggestions
        .iter()
        .map(|emp| Row::new(format::employee_cells(emp)))
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(vec!["ID", "Name", "Rating"]).style(header_style()));

    frame.render_widget(table, chunks[1]);
}
