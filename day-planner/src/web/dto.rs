//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{DayPlan, Location, PlanEntry, RouteSet};

/// Form field carrying the start point of each pair.
pub const START_POINTS_FIELD: &str = "start_points[]";

/// Form field carrying the destination of each pair.
pub const DESTINATIONS_FIELD: &str = "destinations[]";

/// Optional form field carrying the day to plan, as `YYYY-MM-DD`.
pub const TRAVEL_DATE_FIELD: &str = "travel_date";

/// Format of the travel date sent by an HTML date input.
const TRAVEL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Submitted route form: two parallel lists of addresses and an optional
/// travel date.
///
/// The browser sends each list as repeated fields, so the body is decoded
/// as raw key/value pairs and split here. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRoutesForm {
    pub start_points: Vec<String>,
    pub destinations: Vec<String>,
    /// Raw travel date; `None` when the field is absent or blank.
    pub travel_date: Option<String>,
}

impl PlanRoutesForm {
    /// Split decoded form fields into the two lists, keeping field order.
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (name, value) in fields {
            match name.as_str() {
                START_POINTS_FIELD => form.start_points.push(value),
                DESTINATIONS_FIELD => form.destinations.push(value),
                TRAVEL_DATE_FIELD if !value.trim().is_empty() => {
                    form.travel_date = Some(value.trim().to_string())
                }
                _ => {}
            }
        }
        form
    }

    /// Zip the lists into `(start, destination)` pairs.
    ///
    /// Returns `None` if the lists differ in length.
    pub fn pairs(&self) -> Option<Vec<(Location, Location)>> {
        if self.start_points.len() != self.destinations.len() {
            return None;
        }

        Some(
            self.start_points
                .iter()
                .zip(&self.destinations)
                .map(|(s, d)| (Location::new(s.as_str()), Location::new(d.as_str())))
                .collect(),
        )
    }

    /// Parse the travel date, if one was given.
    pub fn travel_date(&self) -> Result<Option<NaiveDate>, chrono::ParseError> {
        self.travel_date
            .as_deref()
            .map(|raw| NaiveDate::parse_from_str(raw, TRAVEL_DATE_FORMAT))
            .transpose()
    }
}

/// A planned leg.
#[derive(Debug, Serialize)]
pub struct PlanEntryResult {
    /// Start address
    pub origin: String,

    /// Destination address
    pub destination: String,

    /// Departure time ("HH:MM")
    pub departure_time: String,

    /// Arrival time ("HH:MM")
    pub arrival_time: String,

    /// Estimated travel time in seconds
    pub estimated_duration_secs: i64,

    /// Estimated travel time for display ("25m", "1h 5m")
    pub estimated_duration: String,
}

/// Response for route planning: one list of legs per submitted pair.
#[derive(Debug, Serialize)]
pub struct PlanRoutesResponse {
    pub routes: Vec<Vec<PlanEntryResult>>,
}

// Conversion implementations

impl PlanEntryResult {
    /// Create from a domain PlanEntry.
    pub fn from_entry(entry: &PlanEntry) -> Self {
        Self {
            origin: entry.origin().to_string(),
            destination: entry.destination().to_string(),
            departure_time: entry.departure_display(),
            arrival_time: entry.arrival_display(),
            estimated_duration_secs: entry.estimated_duration().num_seconds(),
            estimated_duration: entry.duration_display(),
        }
    }
}

impl PlanRoutesResponse {
    /// Create from a domain RouteSet.
    pub fn from_route_set(routes: &RouteSet) -> Self {
        Self {
            routes: routes.iter().map(day_plan_results).collect(),
        }
    }
}

fn day_plan_results(plan: &DayPlan) -> Vec<PlanEntryResult> {
    plan.iter().map(PlanEntryResult::from_entry).collect()
}
