//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDate;

use crate::domain::{DayPlan, PlanEntry, RouteSet, TravelMode};

use super::maps::directions_url;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route entry form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Planned routes page.
#[derive(Template)]
#[template(path = "directions.html")]
pub struct DirectionsTemplate {
    /// Planned day, e.g. "Friday 15 March 2024"
    pub travel_date: String,
    pub routes: Vec<RouteView>,
}

impl DirectionsTemplate {
    /// Build the page for a route set planned on `travel_date`.
    pub fn from_route_set(routes: &RouteSet, travel_date: NaiveDate, mode: TravelMode) -> Self {
        Self {
            travel_date: travel_date.format("%A %-d %B %Y").to_string(),
            routes: routes
                .iter()
                .enumerate()
                .map(|(i, plan)| RouteView::from_day_plan(i + 1, plan, mode))
                .collect(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One day plan, numbered from 1 in submission order.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub number: usize,
    pub entries: Vec<PlanEntryView>,
}

impl RouteView {
    /// Create from a domain DayPlan.
    pub fn from_day_plan(number: usize, plan: &DayPlan, mode: TravelMode) -> Self {
        Self {
            number,
            entries: plan
                .iter()
                .map(|e| PlanEntryView::from_entry(e, mode))
                .collect(),
        }
    }
}

/// Plan entry view model.
#[derive(Debug, Clone)]
pub struct PlanEntryView {
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_display: String,
    /// Maps link for turn-by-turn directions
    pub maps_url: String,
}

impl PlanEntryView {
    /// Create from a domain PlanEntry.
    pub fn from_entry(entry: &PlanEntry, mode: TravelMode) -> Self {
        Self {
            origin: entry.origin().to_string(),
            destination: entry.destination().to_string(),
            departure_time: entry.departure_display(),
            arrival_time: entry.arrival_display(),
            duration_display: entry.duration_display(),
            maps_url: directions_url(entry.origin(), entry.destination(), mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn route_set() -> RouteSet {
        let eight = day().and_hms_opt(8, 0, 0).unwrap();
        let mut routes = RouteSet::new();

        let mut first = DayPlan::new();
        first.push(
            PlanEntry::new("Home".into(), "Office".into(), eight, Duration::minutes(25)).unwrap(),
        );
        routes.push(first);

        let mut second = DayPlan::new();
        let office_departure = eight + Duration::minutes(85);
        second.push(
            PlanEntry::new("Office".into(), "<Gym>".into(), office_departure, Duration::minutes(70))
                .unwrap(),
        );
        routes.push(second);

        routes
    }

    #[test]
    fn routes_are_numbered_from_one() {
        let page = DirectionsTemplate::from_route_set(&route_set(), day(), TravelMode::Driving);

        let numbers: Vec<usize> = page.routes.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn entry_view_fields() {
        let page = DirectionsTemplate::from_route_set(&route_set(), day(), TravelMode::Driving);
        let entry = &page.routes[1].entries[0];

        assert_eq!(entry.departure_time, "09:25");
        assert_eq!(entry.arrival_time, "10:35");
        assert_eq!(entry.duration_display, "1h 10m");
        assert!(entry.maps_url.contains("travelmode=driving"));
    }

    #[test]
    fn directions_page_renders_times() {
        let html = DirectionsTemplate::from_route_set(&route_set(), day(), TravelMode::Driving)
            .render()
            .unwrap();

        assert!(html.contains("08:00"));
        assert!(html.contains("08:25"));
        assert!(html.contains("25m"));
        assert!(html.contains("Route 2"));
        assert!(html.contains("Friday 15 March 2024"));
    }

    #[test]
    fn directions_page_escapes_addresses() {
        let html = DirectionsTemplate::from_route_set(&route_set(), day(), TravelMode::Driving)
            .render()
            .unwrap();

        assert!(!html.contains("<Gym>"));
        assert!(html.contains("&lt;Gym&gt;"));
    }

    #[test]
    fn empty_route_set_renders() {
        let page = DirectionsTemplate::from_route_set(&RouteSet::new(), day(), TravelMode::Driving);
        let html = page.render().unwrap();

        assert!(html.contains("No routes"));
    }

    #[test]
    fn index_page_has_form_fields() {
        let html = IndexTemplate.render().unwrap();

        assert!(html.contains("start_points[]"));
        assert!(html.contains("destinations[]"));
        assert!(html.contains("action=\"/directions\""));
        assert!(html.contains("name=\"travel_date\""));
    }
}
