//! Directions HTTP client.
//!
//! Queries a Google-Directions-compatible JSON endpoint. The client is built
//! once at startup and shared across requests; it carries no mutable state
//! beyond the connection pool inside `reqwest::Client`.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta, TimeZone};
use tracing::debug;

use super::DirectionsService;
use super::error::DirectionsError;
use super::types::{DirectionsRequest, DirectionsResponse};

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Path of the JSON directions endpoint below the base URL.
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the directions client.
#[derive(Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to Google)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Directions API client.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            DIRECTIONS_PATH
        );

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
        })
    }

    /// The full endpoint URL queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch directions for a single origin/destination pair.
    ///
    /// `OK` and `ZERO_RESULTS` responses are returned as-is, so an empty
    /// route list is not an error here. Any other status in the body is
    /// reported as [`DirectionsError::Status`].
    pub async fn get_directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let departure = to_unix_seconds(request.departure_time);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            mode = %request.mode,
            departure,
            "querying directions"
        );

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query_params(request, departure, &self.api_key))
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await.map_err(redact)?;
        parse_body(&body)
    }
}

impl DirectionsService for DirectionsClient {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.get_directions(request).await
    }
}

/// Strip the request URL, which carries the API key, from a transport error.
fn redact(err: reqwest::Error) -> DirectionsError {
    DirectionsError::Http(err.without_url())
}

/// Build the query string for a request.
fn query_params(
    request: &DirectionsRequest,
    departure: i64,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("origin", request.origin.as_str().to_string()),
        ("destination", request.destination.as_str().to_string()),
        ("mode", request.mode.as_str().to_string()),
        ("departure_time", departure.to_string()),
        ("traffic_model", request.traffic_model.as_str().to_string()),
        ("key", api_key.to_string()),
    ]
}

/// Decode a response body and check its status field.
fn parse_body(body: &str) -> Result<DirectionsResponse, DirectionsError> {
    let parsed: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

    if parsed.is_success() {
        Ok(parsed)
    } else {
        Err(DirectionsError::Status {
            status: parsed.status,
            message: parsed.error_message,
        })
    }
}

/// Interpret a naive wall-clock time in the host's local zone.
fn to_unix_seconds(time: NaiveDateTime) -> i64 {
    unix_seconds_in(&Local, time)
}

/// Interpret a naive wall-clock time in `tz`.
///
/// An ambiguous time takes its earlier instant. A time inside a DST gap is
/// moved forward an hour, past the gap, so it never resolves to an instant
/// before the wall-clock times around it.
fn unix_seconds_in<Tz: TimeZone>(tz: &Tz, time: NaiveDateTime) -> i64 {
    tz.from_local_datetime(&time)
        .earliest()
        .or_else(|| {
            let after_gap = time.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&after_gap).earliest()
        })
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| time.and_utc().timestamp())
}
