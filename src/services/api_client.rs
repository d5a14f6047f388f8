//! Typed client for the booking catalog API.
//!
//! All endpoints are plain GETs with no bodies, headers, authentication, or
//! pagination. Responses are decoded straight into the wire models; a
//! missing or malformed field is a decode error here, not a rendering
//! concern downstream.

use std::env;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::city::City;
use crate::models::destination::Destination;
use crate::models::hotel::Hotel;
use crate::models::room::Room;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Failure of a catalog request, split by cause so callers can tell a dead
/// network from a server-side rejection from a schema mismatch.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct BookingApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl BookingApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Build a client from `BOOKING_API_URL`, falling back to the local
    /// development host.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let base_url =
            env::var("BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn cities(&self) -> Result<Vec<City>, ApiError> {
        self.get_json(format!("{}/api/cities/", self.base_url)).await
    }

    pub async fn popular_destinations(&self, city_id: i64) -> Result<Vec<Destination>, ApiError> {
        self.get_json(format!(
            "{}/api/cities/{}/popular-destinations/",
            self.base_url, city_id
        ))
        .await
    }

    pub async fn hotels(&self, city_id: i64) -> Result<Vec<Hotel>, ApiError> {
        self.get_json(format!("{}/api/hotels/{}", self.base_url, city_id))
            .await
    }

    pub async fn rooms(&self, hotel_id: i64) -> Result<Vec<Room>, ApiError> {
        self.get_json(format!("{}/api/floor/rooms/{}/", self.base_url, hotel_id))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}
