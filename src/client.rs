// HTTP client for the remote itinerary generation service
// The service is an opaque collaborator: one request per call, no retries

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Destination;
use crate::models::{
    BookingConfirmation, BookingRequest, DestinationsResponse, GenerateItineraryResponse,
    HealthStatus, ServiceErrorBody, StoredItinerary,
};
use crate::payload::ItineraryRequestPayload;

pub const DEFAULT_BASE_URL: &str = "https://intellitravel-backend-460106378500.us-central1.run.app";

pub const BASE_URL_ENV: &str = "ITINERARY_SERVICE_URL";
pub const TIMEOUT_ENV: &str = "ITINERARY_TIMEOUT_MS";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("API error: {status_code} - {message}")]
    ApiResponseError { status_code: u16, message: String },

    #[error("Itinerary not found: {0}")]
    NotFound(String),

    #[error("Invalid response body: {0}")]
    DecodeError(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    // None leaves requests unbounded
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            user_agent: format!("trip-planner/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reads `ITINERARY_SERVICE_URL` and `ITINERARY_TIMEOUT_MS`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let timeout = raw.trim().parse::<u64>().map_err(|e| {
                ClientError::ConfigError(format!("Invalid {}={:?}: {}", TIMEOUT_ENV, raw, e))
            })?;
            config.timeout_ms = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::ConfigError(format!("Invalid base URL {:?}: {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::ConfigError(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        if self.timeout_ms == Some(0) {
            return Err(ClientError::ConfigError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Operations offered by the itinerary service
#[async_trait]
pub trait ItineraryService: Send + Sync + 'static {
    async fn generate_itinerary(
        &self,
        payload: &ItineraryRequestPayload,
    ) -> Result<GenerateItineraryResponse, ApiError>;

    async fn destinations(&self) -> Result<Vec<Destination>, ApiError>;

    async fn get_itinerary(&self, itinerary_id: &str) -> Result<StoredItinerary, ApiError>;

    async fn book_itinerary(
        &self,
        itinerary_id: &str,
        booking_details: Value,
    ) -> Result<BookingConfirmation, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

pub struct HttpItineraryClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpItineraryClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let http = builder
            .build()
            .map_err(|e| ClientError::InitError(e.to_string()))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    // The id becomes one percent-encoded path segment; `.` and `..` would be
    // dropped by the URL normalizer, so they can never name a stored itinerary
    fn itinerary_url(&self, itinerary_id: &str) -> Result<Url, ApiError> {
        if itinerary_id.is_empty() || itinerary_id == "." || itinerary_id == ".." {
            return Err(ApiError::NotFound(itinerary_id.to_string()));
        }

        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::NetworkError(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::NetworkError("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["api", "itinerary"])
            .push(itinerary_id);
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout_ms.unwrap_or_default())
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            return Err(ApiError::ApiResponseError {
                status_code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::DecodeError(e.to_string()))
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryClient {
    async fn generate_itinerary(
        &self,
        payload: &ItineraryRequestPayload,
    ) -> Result<GenerateItineraryResponse, ApiError> {
        let url = self.endpoint("/api/generate-itinerary");
        debug!(
            %url,
            destination = %payload.destination,
            duration = payload.duration,
            "Requesting itinerary"
        );

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }

    async fn destinations(&self) -> Result<Vec<Destination>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/destinations"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let body: DestinationsResponse = self.decode(response).await?;
        Ok(body.destinations)
    }

    async fn get_itinerary(&self, itinerary_id: &str) -> Result<StoredItinerary, ApiError> {
        let url = self.itinerary_url(itinerary_id)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(itinerary_id.to_string()));
        }
        self.decode(response).await
    }

    async fn book_itinerary(
        &self,
        itinerary_id: &str,
        booking_details: Value,
    ) -> Result<BookingConfirmation, ApiError> {
        let request = BookingRequest {
            itinerary_id: itinerary_id.to_string(),
            booking_details,
        };

        let response = self
            .http
            .post(self.endpoint("/api/book-itinerary"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/health"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }
}
