//! HTTP client for the rating backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::types::*;
use super::Resource;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors that can occur when talking to the rating API.
///
/// The dashboard treats every variant as "fetch failed"; the distinction only
/// shows up in logs and the status marker text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Read access to the five dashboard resources.
#[async_trait]
pub trait PerformanceApi: Send + Sync {
    /// `GET /api/employees`
    async fn employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// `GET /api/employees/rating-categories`
    async fn rating_categories(&self) -> Result<Vec<RatingCategory>, ApiError>;

    /// `GET /api/employees/actual-percentages`
    async fn actual_percentages(&self) -> Result<CategoryFigures, ApiError>;

    /// `GET /api/employees/deviation`
    async fn deviations(&self) -> Result<CategoryFigures, ApiError>;

    /// `GET /api/employees/suggest-adjustments`
    async fn suggested_adjustments(&self) -> Result<Vec<Employee>, ApiError>;
}

/// reqwest-backed [`PerformanceApi`].
pub struct HttpPerformanceApi {
    client: Client,
    base_url: String,
}

impl HttpPerformanceApi {
    /// Create a client with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeouts(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(ApiError::Http)?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource.
    pub fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> ApiError {
        if err.is_connect() {
            ApiError::Connection(format!("Cannot connect to {}", self.base_url))
        } else if err.is_timeout() {
            ApiError::Timeout(url.to_string())
        } else {
            ApiError::Http(err)
        }
    }

    /// GET a resource and decode its JSON body.
    async fn get<R: DeserializeOwned>(&self, resource: Resource) -> Result<R, ApiError> {
        let url = self.url(resource);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: resource.path(),
                status: status.as_u16(),
            });
        }

        // The request timeout also covers reading the body
        let body = response.bytes().await.map_err(|e| self.classify(e, &url))?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::Parse(format!("{}: {}", resource.path(), e)))
    }
}

#[async_trait]
impl PerformanceApi for HttpPerformanceApi {
    async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get(Resource::Employees).await
    }

    async fn rating_categories(&self) -> Result<Vec<RatingCategory>, ApiError> {
        self.get(Resource::RatingCategories).await
    }

    async fn actual_percentages(&self) -> Result<CategoryFigures, ApiError> {
        self.get(Resource::ActualPercentages).await
    }

    async fn deviations(&self) -> Result<CategoryFigures, ApiError> {
        self.get(Resource::Deviations).await
    }

    async fn suggested_adjustments(&self) -> Result<Vec<Employee>, ApiError> {
        self.get(Resource::Suggestions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = HttpPerformanceApi::new("http://localhost:7060/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:7060");
        assert_eq!(
            api.url(Resource::Deviations),
            "http://localhost:7060/api/employees/deviation"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            path: Resource::Suggestions.path(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "/api/employees/suggest-adjustments returned HTTP 503"
        );
    }
}
