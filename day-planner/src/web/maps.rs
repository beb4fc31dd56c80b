//! Google Maps URL generation.
//!
//! Each planned leg links to the Maps directions page so the user can open
//! turn-by-turn navigation for it. No API key is involved; this is the
//! public "Maps URLs" scheme.

use crate::domain::{Location, TravelMode};

/// Base of the Maps directions URL scheme.
const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Generate a Maps directions URL for a leg.
///
/// # Example
///
/// ```
/// use day_planner::domain::{Location, TravelMode};
/// use day_planner::web::directions_url;
///
/// let url = directions_url(&Location::new("A St"), &Location::new("B Rd"), TravelMode::Driving);
/// assert_eq!(
///     url,
///     "https://www.google.com/maps/dir/?api=1&origin=A+St&destination=B+Rd&travelmode=driving"
/// );
/// ```
pub fn directions_url(origin: &Location, destination: &Location, mode: TravelMode) -> String {
    let params = [
        ("api", "1"),
        ("origin", origin.as_str()),
        ("destination", destination.as_str()),
        ("travelmode", mode.as_str()),
    ];

    reqwest::Url::parse_with_params(MAPS_DIRECTIONS_URL, &params)
        .map(String::from)
        .unwrap_or_else(|_| MAPS_DIRECTIONS_URL.to_string())
}
