//! Text formatting shared by the TUI and the snapshot report.

use crate::api::{CategoryFigures, Employee, RatingCategory};
use crate::domain::Remote;

/// Shown instead of the suggestions table when the list is empty.
pub const NO_ADJUSTMENTS: &str = "No adjustments needed.";

/// Format a percentage-valued number with two decimals: `12.5` → `12.50%`.
pub fn percent(value: f64) -> String {
    // -0.0 would print as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}%", value)
}

/// Sentence above the suggestions table.
pub fn suggestions_summary(count: usize) -> String {
    if count == 0 {
        NO_ADJUSTMENTS.to_string()
    } else {
        format!("Suggested adjustments for {} employee(s).", count)
    }
}

pub fn employee_cells(employee: &Employee) -> [String; 3] {
    [
        employee.id.to_string(),
        employee.name.clone(),
        employee.rating.clone(),
    ]
}

pub fn category_cells(category: &RatingCategory) -> [String; 2] {
    [category.category.clone(), percent(category.standard_percentage)]
}

pub fn figure_cells(figures: &CategoryFigures) -> Vec<[String; 2]> {
    figures
        .iter()
        .map(|(category, value)| [category.to_string(), percent(value)])
        .collect()
}

/// Section heading with the slice's fetch state appended.
pub fn section_title<T>(name: &str, remote: &Remote<T>) -> String {
    if let Some(err) = remote.error() {
        format!(" {} [failed: {}] ", name, err)
    } else if remote.is_pending() {
        format!(" {} (loading...) ", name)
    } else {
        format!(" {} ", name)
    }
}
