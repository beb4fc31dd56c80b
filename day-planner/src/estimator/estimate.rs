//! Single-leg travel-time estimation with clamp and fallback.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

use crate::directions::{DirectionsError, DirectionsRequest, DirectionsService};
use crate::domain::{Location, TravelMode};

use super::clock::{Clock, SystemClock};

/// Duration used when the service has no traffic estimate for a leg.
pub const FALLBACK_TRAVEL_MINS: i64 = 30;

/// Error from travel-time estimation.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The directions service could not be reached or refused the query
    #[error("directions service unavailable: {0}")]
    Unavailable(#[from] DirectionsError),
}

/// Estimates travel time between two locations.
///
/// Missing data degrades to a fixed fallback duration; only a failed or
/// refused query is an error.
pub struct Estimator<D> {
    directions: Arc<D>,
    clock: Arc<dyn Clock>,
    fallback: Duration,
}

impl<D: DirectionsService> Estimator<D> {
    /// Create an estimator on the system clock with the default fallback.
    pub fn new(directions: Arc<D>) -> Self {
        Self {
            directions,
            clock: Arc::new(SystemClock),
            fallback: Duration::minutes(FALLBACK_TRAVEL_MINS),
        }
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a different fallback duration.
    pub fn with_fallback(mut self, fallback: Duration) -> Self {
        self.fallback = fallback;
        self
    }

    /// The current time according to this estimator's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// The underlying directions service.
    pub fn directions(&self) -> &Arc<D> {
        &self.directions
    }

    /// Estimate the travel time from `origin` to `destination` departing at
    /// `requested_time`.
    ///
    /// A `requested_time` earlier than now is moved up to now before the
    /// query is sent. Exactly one query is issued. Returns the first leg's
    /// traffic-adjusted duration, or the fallback when the response has no
    /// route, no leg, or no usable traffic duration.
    pub async fn estimate(
        &self,
        origin: &Location,
        destination: &Location,
        mode: TravelMode,
        requested_time: NaiveDateTime,
    ) -> Result<Duration, EstimateError> {
        let departure_time = requested_time.max(self.clock.now());
        let request =
            DirectionsRequest::new(origin.clone(), destination.clone(), mode, departure_time);

        let response = self.directions.directions(&request).await?;

        let Some(secs) = response.traffic_duration_secs() else {
            warn!(
                %origin,
                %destination,
                routes = response.routes.len(),
                fallback_mins = self.fallback.num_minutes(),
                "no traffic estimate, using fallback"
            );
            return Ok(self.fallback);
        };

        match usable_travel_time(secs, departure_time) {
            Some(travel_time) => {
                debug!(%origin, %destination, secs, "traffic estimate");
                Ok(travel_time)
            }
            None => {
                warn!(
                    %origin,
                    %destination,
                    secs,
                    fallback_mins = self.fallback.num_minutes(),
                    "traffic estimate out of range, using fallback"
                );
                Ok(self.fallback)
            }
        }
    }
}

/// Convert a reported duration into a travel time that can be added to
/// `departure_time`. Negative and unrepresentable values are rejected.
fn usable_travel_time(secs: i64, departure_time: NaiveDateTime) -> Option<Duration> {
    let travel_time = Duration::try_seconds(secs)?;
    if travel_time < Duration::zero() {
        return None;
    }
    departure_time.checked_add_signed(travel_time)?;
    Some(travel_time)
}
