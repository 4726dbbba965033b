//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration
//! - `tables.rs`: Employee table and the four analytics sections
//! - `form.rs`: Add/update form and status line
//! - `format.rs`: Text formatting shared with the snapshot report
//! - `widgets/`: Reusable UI components

mod form;
mod layout;
mod tables;

pub mod format;
pub mod widgets;

pub use layout::render;
