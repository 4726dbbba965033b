//! Domain models for the dashboard.

mod app;
mod form;
mod remote;
mod roster;

pub use app::{App, AppState, Command, StatusMessage};
pub use form::{EmployeeForm, FormField, FormMode};
pub use remote::Remote;
pub use roster::{EmployeeDraft, EmployeeRoster, IdAllocator, RosterError};
