//! Rating Dashboard: employee performance ratings in the terminal.
//!
//! Reads five resources from the rating API (employees, rating categories,
//! actual percentages, deviations and suggested adjustments) and shows them
//! side by side. The employee list can be edited locally; edits are never
//! sent back to the server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  EMPLOYEE PERFORMANCE DASHBOARD                                 │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  EMPLOYEES             │  RATING CATEGORIES                     │
//! │  1  Ann Lee   A        │  ACTUAL PERCENTAGES                    │
//! │  2  Bob Smith B        │  DEVIATION (ACTUAL - STANDARD)         │
//! │  ...                   │  SUGGESTED ADJUSTMENTS                 │
//! ├────────────────────────┴────────────────────────────────────────┤
//! │  Name: [...]  Rating: [...]   [Enter] Add Employee              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - `api`: HTTP client, response types, concurrent loader
//! - `domain`: app state, fetch states, local roster
//! - `ui`: ratatui rendering
//! - `report`: plain-text rendering for `--snapshot`

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod report;
pub mod ui;

pub use domain::{App, AppState, EmployeeRoster, Remote, RosterError};
