//! Directions service client.
//!
//! This module provides the outbound seam to a traffic-aware directions
//! service (the Google Directions JSON API, or anything speaking its
//! format).
//!
//! Key characteristics of the service:
//! - `duration_in_traffic` is only returned for driving requests that carry
//!   a departure time, and only when traffic data exists for the route
//! - Departure times in the past are rejected or misbehave, so callers must
//!   never send one
//! - `ZERO_RESULTS` is a successful answer with an empty route list

use std::future::Future;

mod client;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::DirectionsError;
pub use mock::{MockDirectionsClient, empty_response, traffic_response};
pub use types::{
    DirectionsRequest, DirectionsResponse, Route, RouteLeg, STATUS_OK, STATUS_ZERO_RESULTS,
    TextValue, TrafficModel,
};

/// Trait for looking up directions.
///
/// This abstraction allows the estimator to be tested with mock data. The
/// returned future must be `Send` so it can be awaited inside axum handlers.
pub trait DirectionsService: Send + Sync {
    /// Issue a single directions query.
    fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> impl Future<Output = Result<DirectionsResponse, DirectionsError>> + Send;
}
