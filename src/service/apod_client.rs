//! Outbound client for the astronomy picture of the day endpoint.

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;

use crate::domain::{ApodPayload, AstronomyRecord};
use crate::error::AppError;

/// Fetches today's entry from a fixed APOD endpoint.
///
/// One GET per call, carrying only the static `api_key` parameter. No
/// retry and no caching; the transport's default timeout applies.
#[derive(Debug, Clone)]
pub struct ApodClient {
    http: reqwest::Client,
    url: reqwest::Url,
    endpoint: String,
}

impl ApodClient {
    /// Creates a client for `endpoint` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the endpoint is not a valid URL
    /// or the HTTP client cannot be built.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, AppError> {
        let url = reqwest::Url::parse_with_params(endpoint, &[("api_key", api_key)])
            .map_err(|e| AppError::Internal(format!("invalid APOD endpoint {endpoint}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url,
            endpoint: endpoint.to_string(),
        })
    }

    /// Endpoint this client calls, without credentials.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches today's astronomy entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] when the endpoint answers 429,
    /// and [`AppError::Fetch`] on network failure, any other non-success
    /// status, or an undecodable body.
    pub async fn fetch_today(&self) -> Result<AstronomyRecord, AppError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Error fetching APOD data: {}", e.without_url())))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            return Err(AppError::RateLimited { retry_after_secs });
        }
        if !status.is_success() {
            return Err(AppError::Fetch(format!(
                "Failed to fetch APOD data: upstream returned {status}"
            )));
        }

        let payload: ApodPayload = response.json().await.map_err(|e| {
            AppError::Fetch(format!("Failed to fetch APOD data: {}", e.without_url()))
        })?;

        tracing::debug!(endpoint = %self.endpoint, date = %payload.date, "astronomy entry fetched");
        Ok(payload.into())
    }
}
