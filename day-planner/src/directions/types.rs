//! Directions API request and response types.
//!
//! The response types map directly to the Google Directions JSON API. They
//! use `Option` and `#[serde(default)]` liberally because the service omits
//! fields rather than sending null, most notably `duration_in_traffic`
//! when no traffic model applies.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::{Location, TravelMode};

/// Status for a successful query with at least one route.
pub const STATUS_OK: &str = "OK";

/// Status for a successful query that found no route.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Traffic assumption applied to the duration estimate.
///
/// Only the service's best guess is ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrafficModel {
    #[default]
    BestGuess,
}

impl TrafficModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficModel::BestGuess => "best_guess",
        }
    }
}

/// A single directions lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsRequest {
    pub origin: Location,
    pub destination: Location,
    pub mode: TravelMode,
    /// Local wall-clock departure. Never in the past when built by the estimator.
    pub departure_time: NaiveDateTime,
    pub traffic_model: TrafficModel,
}

impl DirectionsRequest {
    /// Create a best-guess traffic request.
    pub fn new(
        origin: Location,
        destination: Location,
        mode: TravelMode,
        departure_time: NaiveDateTime,
    ) -> Self {
        Self {
            origin,
            destination,
            mode,
            departure_time,
            traffic_model: TrafficModel::BestGuess,
        }
    }
}

/// Top-level directions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    /// "OK", "ZERO_RESULTS", "NOT_FOUND", "REQUEST_DENIED", ...
    pub status: String,

    /// Human-readable detail accompanying a non-OK status.
    pub error_message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Whether the status means the routes can be used (possibly empty).
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK || self.status == STATUS_ZERO_RESULTS
    }

    /// Traffic-adjusted duration of the first leg of the first route, in seconds.
    pub fn traffic_duration_secs(&self) -> Option<i64> {
        self.routes
            .first()?
            .legs
            .first()?
            .duration_in_traffic
            .as_ref()
            .map(|d| d.value)
    }
}

/// A route made of one leg per waypoint pair.
///
/// Only the fields the estimator reads are decoded; the rest of the
/// service's payload (summary, distance, addresses, steps) is skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// One leg of a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteLeg {
    /// Duration under the requested traffic model. Only present for driving
    /// requests with a departure time. The traffic-free `duration` is not
    /// used.
    pub duration_in_traffic: Option<TextValue>,
}

/// A numeric value with its display text, e.g. `{ "value": 1500, "text": "25 mins" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextValue {
    pub value: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leg_with_traffic() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "summary": "SH1",
                "legs": [{
                    "duration": { "value": 1320, "text": "22 mins" },
                    "duration_in_traffic": { "value": 1500, "text": "25 mins" },
                    "distance": { "value": 18000, "text": "18 km" },
                    "start_address": "A",
                    "end_address": "B"
                }]
            }]
        }"#;

        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.traffic_duration_secs(), Some(1500));
    }

    #[test]
    fn leg_without_traffic_has_no_traffic_duration() {
        let json = r#"{
            "status": "OK",
            "routes": [{ "legs": [{ "duration": { "value": 600, "text": "10 mins" } }] }]
        }"#;

        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.traffic_duration_secs(), None);
    }

    #[test]
    fn zero_results_has_no_routes() {
        let json = r#"{ "status": "ZERO_RESULTS", "routes": [] }"#;

        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert!(resp.routes.is_empty());
        assert_eq!(resp.traffic_duration_secs(), None);
    }

    #[test]
    fn missing_routes_field_defaults_to_empty() {
        let json = r#"{ "status": "REQUEST_DENIED", "error_message": "bad key" }"#;

        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.is_success());
        assert!(resp.routes.is_empty());
        assert_eq!(resp.error_message.as_deref(), Some("bad key"));
    }

    #[test]
    fn route_without_legs_has_no_traffic_duration() {
        let json = r#"{ "status": "OK", "routes": [{ "summary": "x" }] }"#;

        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.traffic_duration_secs(), None);
    }

    #[test]
    fn request_defaults_to_best_guess() {
        let when = chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let req = DirectionsRequest::new("A".into(), "B".into(), TravelMode::Driving, when);

        assert_eq!(req.traffic_model, TrafficModel::BestGuess);
        assert_eq!(req.traffic_model.as_str(), "best_guess");
    }
}
