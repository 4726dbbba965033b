//! Concurrent fetching of the dashboard resources.
//!
//! Every resource is fetched independently; a failure in one never affects
//! the others. Results are handed back as [`FetchEvent`]s for the dashboard
//! to apply.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{ApiError, CategoryFigures, Employee, PerformanceApi, RatingCategory, Resource};

/// Completion of a single resource fetch.
#[derive(Debug)]
pub enum FetchEvent {
    Employees(Result<Vec<Employee>, ApiError>),
    RatingCategories(Result<Vec<RatingCategory>, ApiError>),
    ActualPercentages(Result<CategoryFigures, ApiError>),
    Deviations(Result<CategoryFigures, ApiError>),
    Suggestions(Result<Vec<Employee>, ApiError>),
}

impl FetchEvent {
    /// Which resource this event belongs to.
    pub fn resource(&self) -> Resource {
        match self {
            FetchEvent::Employees(_) => Resource::Employees,
            FetchEvent::RatingCategories(_) => Resource::RatingCategories,
            FetchEvent::ActualPercentages(_) => Resource::ActualPercentages,
            FetchEvent::Deviations(_) => Resource::Deviations,
            FetchEvent::Suggestions(_) => Resource::Suggestions,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            FetchEvent::Employees(r) => r.is_ok(),
            FetchEvent::RatingCategories(r) => r.is_ok(),
            FetchEvent::ActualPercentages(r) => r.is_ok(),
            FetchEvent::Deviations(r) => r.is_ok(),
            FetchEvent::Suggestions(r) => r.is_ok(),
        }
    }
}

/// Fetch a single resource.
pub async fn fetch(api: &dyn PerformanceApi, resource: Resource) -> FetchEvent {
    debug!(resource = resource.label(), path = resource.path(), "fetching");
    match resource {
        Resource::Employees => FetchEvent::Employees(api.employees().await),
        Resource::RatingCategories => FetchEvent::RatingCategories(api.rating_categories().await),
        Resource::ActualPercentages => {
            FetchEvent::ActualPercentages(api.actual_percentages().await)
        }
        Resource::Deviations => FetchEvent::Deviations(api.deviations().await),
        Resource::Suggestions => FetchEvent::Suggestions(api.suggested_adjustments().await),
    }
}

/// Fetch all five resources concurrently and wait for every one of them.
///
/// Events are returned in [`Resource::ALL`] order.
pub async fn load_all(api: &dyn PerformanceApi) -> Vec<FetchEvent> {
    let (employees, categories, actual, deviations, suggestions) = tokio::join!(
        fetch(api, Resource::Employees),
        fetch(api, Resource::RatingCategories),
        fetch(api, Resource::ActualPercentages),
        fetch(api, Resource::Deviations),
        fetch(api, Resource::Suggestions),
    );

    vec![employees, categories, actual, deviations, suggestions]
}

/// Spawn one task per resource; each sends its event as soon as it completes.
pub fn spawn_all(
    api: Arc<dyn PerformanceApi>,
    tx: mpsc::Sender<FetchEvent>,
) -> Vec<JoinHandle<()>> {
    Resource::ALL
        .iter()
        .map(|&resource| {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let event = fetch(api.as_ref(), resource).await;
                if tx.send(event).await.is_err() {
                    debug!(resource = resource.label(), "dashboard closed before fetch completed");
                }
            })
        })
        .collect()
}
