//! Mock directions client for testing without API access.
//!
//! Serves canned responses keyed by origin and destination and records
//! every request it receives, so tests can assert on what the estimator
//! actually asked for.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::Location;

use super::DirectionsService;
use super::error::DirectionsError;
use super::types::{DirectionsRequest, DirectionsResponse, Route, RouteLeg, STATUS_OK, TextValue};

/// Mock directions client that serves in-memory responses.
///
/// Pairs without a registered response get the default response, which is
/// an `OK` status with no routes unless overridden.
#[derive(Debug, Default)]
pub struct MockDirectionsClient {
    responses: HashMap<(Location, Location), DirectionsResponse>,
    default_response: Option<DirectionsResponse>,
    unavailable: bool,
    requests: Mutex<Vec<DirectionsRequest>>,
}

impl MockDirectionsClient {
    /// Create a mock with no registered routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a traffic-aware duration for an origin/destination pair.
    pub fn with_traffic_duration(
        self,
        origin: impl Into<Location>,
        destination: impl Into<Location>,
        secs: i64,
    ) -> Self {
        self.with_response(origin, destination, traffic_response(secs))
    }

    /// Register a full response for an origin/destination pair.
    pub fn with_response(
        mut self,
        origin: impl Into<Location>,
        destination: impl Into<Location>,
        response: DirectionsResponse,
    ) -> Self {
        self.responses
            .insert((origin.into(), destination.into()), response);
        self
    }

    /// Response for pairs with nothing registered.
    pub fn with_default_response(mut self, response: DirectionsResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Make every request fail as if the service were down.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl DirectionsService for MockDirectionsClient {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.requests.lock().await.push(request.clone());

        if self.unavailable {
            return Err(DirectionsError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }

        let key = (request.origin.clone(), request.destination.clone());
        Ok(self
            .responses
            .get(&key)
            .or(self.default_response.as_ref())
            .cloned()
            .unwrap_or_else(empty_response))
    }
}

/// An `OK` response with a single leg carrying a traffic duration.
pub fn traffic_response(secs: i64) -> DirectionsResponse {
    DirectionsResponse {
        status: STATUS_OK.to_string(),
        error_message: None,
        routes: vec![Route {
            legs: vec![RouteLeg {
                duration_in_traffic: Some(TextValue {
                    value: secs,
                    text: format!("{} mins", secs / 60),
                }),
            }],
        }],
    }
}

/// An `OK` response with no routes.
pub fn empty_response() -> DirectionsResponse {
    DirectionsResponse {
        status: STATUS_OK.to_string(),
        error_message: None,
        routes: Vec::new(),
    }
}
