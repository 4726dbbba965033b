//! Plain-text snapshot of the dashboard, printed by `--snapshot`.

use std::fmt::Write;

use crate::domain::{App, Remote};
use crate::ui::format;

fn heading<T>(output: &mut String, name: &str, remote: &Remote<T>) {
    let _ = writeln!(output);
    let _ = writeln!(output, "## {}", name);
    if let Some(err) = remote.error() {
        let _ = writeln!(output, "(failed to load: {})", err);
    }
}

fn rows<const N: usize>(output: &mut String, header: [&str; N], rows: &[[String; N]]) {
    if rows.is_empty() {
        let _ = writeln!(output, "(none)");
        return;
    }
    let _ = writeln!(output, "{}", header.join(" | "));
    for row in rows {
        let _ = writeln!(output, "{}", row.join(" | "));
    }
}

pub fn build_report(app: &App) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Employee Performance Dashboard");
    let _ = writeln!(output, "Source: {}", app.api_url);

    heading(
        &mut output,
        &format!("Employees ({})", app.roster.len()),
        &app.roster_status,
    );
    let employees: Vec<[String; 3]> = app
        .roster
        .employees()
        .iter()
        .map(format::employee_cells)
        .collect();
    rows(&mut output, ["ID", "Name", "Rating"], &employees);

    heading(&mut output, "Rating Categories", &app.categories);
    let categories: Vec<[String; 2]> = app
        .categories
        .data()
        .map(|cats| cats.iter().map(format::category_cells).collect())
        .unwrap_or_default();
    rows(&mut output, ["Category", "Standard Percentage"], &categories);

    heading(&mut output, "Actual Percentages", &app.actual);
    let actual = app.actual.data().map(format::figure_cells).unwrap_or_default();
    rows(&mut output, ["Category", "Actual Percentage"], &actual);

    heading(&mut output, "Deviation (Actual - Standard)", &app.deviations);
    let deviations = app
        .deviations
        .data()
        .map(format::figure_cells)
        .unwrap_or_default();
    rows(&mut output, ["Category", "Deviation"], &deviations);

    heading(&mut output, "Suggested Adjustments", &app.suggestions);
    match app.suggestions.data() {
        Some(list) => {
            let _ = writeln!(output, "{}", format::suggestions_summary(list.len()));
            if !list.is_empty() {
                let suggestions: Vec<[String; 3]> =
                    list.iter().map(format::employee_cells).collect();
                rows(&mut output, ["ID", "Name", "Rating"], &suggestions);
            }
        }
        None if app.suggestions.is_pending() => {
            let _ = writeln!(output, "(loading...)");
        }
        // The heading already carries the failure
        None => {}
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CategoryFigures, Employee, FetchEvent};

    fn emp(id: u64, name: &str, rating: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn test_report_rows_and_messages() {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();
        app.apply(FetchEvent::Employees(Ok(vec![emp(1, "Ann", "A")])));
        app.apply(FetchEvent::ActualPercentages(Ok(
            vec![("A".to_string(), 12.5)].into_iter().collect::<CategoryFigures>(),
        )));
        app.apply(FetchEvent::Deviations(Err(ApiError::Parse("bad json".to_string()))));
        app.apply(FetchEvent::Suggestions(Ok(vec![])));

        let report = build_report(&app);
        assert!(report.contains("## Employees (1)"));
        assert!(report.contains("\n1 | Ann | A\n"));
        assert!(report.contains("\nA | 12.50%\n"));
        assert!(report.contains("(failed to load: Failed to parse response: bad json)"));
        assert!(report.contains("No adjustments needed."));
    }

    #[test]
    fn test_failed_suggestions_do_not_claim_no_adjustments() {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();
        app.apply(FetchEvent::Suggestions(Err(ApiError::Parse("boom".to_string()))));

        let report = build_report(&app);
        assert!(report.contains("## Suggested Adjustments\n(failed to load: Failed to parse response: boom)\n"));
        assert!(!report.contains(format::NO_ADJUSTMENTS));
    }

    #[test]
    fn test_pending_suggestions_do_not_claim_no_adjustments() {
        let mut app = App::new("http://localhost:7060");
        app.begin_refresh();

        let report = build_report(&app);
        assert!(report.contains("## Suggested Adjustments\n(loading...)\n"));
        assert!(!report.contains(format::NO_ADJUSTMENTS));
    }

    #[test]
    fn test_report_suggestion_table() {
        let mut app = App::new("http://localhost:7060");
        app.apply(FetchEvent::Suggestions(Ok(vec![
            emp(2, "Bob", "C"),
            emp(6, "Farid", "B"),
        ])));

        let report = build_report(&app);
        assert!(report.contains("Suggested adjustments for 2 employee(s).\nID | Name | Rating\n2 | Bob | C\n6 | Farid | B\n"));
    }
}
