//! API client module for the rating backend.
//!
//! Five read-only REST resources, all plain `GET`s returning JSON.

mod client;
mod demo;
mod loader;
mod types;

pub use client::{
    ApiError, HttpPerformanceApi, PerformanceApi, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT,
};
pub use demo::DemoApi;
pub use loader::{fetch, load_all, spawn_all, FetchEvent};
pub use types::*;

/// The five resources the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Employees,
    RatingCategories,
    ActualPercentages,
    Deviations,
    Suggestions,
}

impl Resource {
    /// All resources, in display order.
    pub const ALL: [Resource; 5] = [
        Resource::Employees,
        Resource::RatingCategories,
        Resource::ActualPercentages,
        Resource::Deviations,
        Resource::Suggestions,
    ];

    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Employees => "/api/employees",
            Resource::RatingCategories => "/api/employees/rating-categories",
            Resource::ActualPercentages => "/api/employees/actual-percentages",
            Resource::Deviations => "/api/employees/deviation",
            Resource::Suggestions => "/api/employees/suggest-adjustments",
        }
    }

    /// Human-readable name used in logs and error markers.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Employees => "employees",
            Resource::RatingCategories => "rating categories",
            Resource::ActualPercentages => "actual percentages",
            Resource::Deviations => "deviations",
            Resource::Suggestions => "suggestions",
        }
    }
}
