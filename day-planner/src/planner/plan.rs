//! Sequential day planning.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::directions::DirectionsService;
use crate::domain::{DayPlan, Location, PlanEntry, RouteSet};
use crate::estimator::{EstimateError, Estimator};

use super::config::PlanConfig;

/// Error from day planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A travel-time lookup failed
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// The running clock left the representable date range
    #[error("plan runs past the supported date range after {0}")]
    OutOfRange(NaiveDateTime),
}

/// Builds day plans by chaining travel-time estimates.
pub struct Planner<'a, D> {
    estimator: &'a Estimator<D>,
    config: &'a PlanConfig,
}

impl<'a, D: DirectionsService> Planner<'a, D> {
    /// Create a new planner.
    pub fn new(estimator: &'a Estimator<D>, config: &'a PlanConfig) -> Self {
        Self { estimator, config }
    }

    /// Start of the planning day: today at the configured start time.
    pub fn default_start(&self) -> NaiveDateTime {
        self.estimator.now().date().and_time(self.config.day_start)
    }

    /// Plan a visit to each destination in order, starting from `home`.
    ///
    /// Each leg departs at the running clock, arrives after the estimated
    /// travel time, and the clock then advances by the dwell time. Returns the
    /// plan together with the advanced clock, so a later call can carry on
    /// where this one stopped.
    ///
    /// `start_time` defaults to [`default_start`](Self::default_start).
    pub async fn plan(
        &self,
        home: &Location,
        destinations: &[Location],
        start_time: Option<NaiveDateTime>,
    ) -> Result<(DayPlan, NaiveDateTime), PlanError> {
        let mut current_time = start_time.unwrap_or_else(|| self.default_start());
        let mut origin = home;
        let mut plan = DayPlan::new();

        for destination in destinations {
            let travel_time = self
                .estimator
                .estimate(origin, destination, self.config.mode, current_time)
                .await?;

            let entry = PlanEntry::new(
                origin.clone(),
                destination.clone(),
                current_time,
                travel_time,
            )
            .ok_or(PlanError::OutOfRange(current_time))?;
            debug!(
                %origin,
                %destination,
                departure = %entry.departure_display(),
                arrival = %entry.arrival_display(),
                "planned leg"
            );

            current_time = entry
                .arrival_time()
                .checked_add_signed(self.config.dwell())
                .ok_or(PlanError::OutOfRange(entry.arrival_time()))?;
            origin = destination;
            plan.push(entry);
        }

        Ok((plan, current_time))
    }

    /// Plan each `(start, destination)` pair as its own single-leg day plan.
    ///
    /// The clock is shared: pair `i + 1` departs when pair `i`'s stay ends.
    /// Pairs are planned one after another, never concurrently.
    pub async fn plan_route_set(
        &self,
        pairs: &[(Location, Location)],
        start_time: Option<NaiveDateTime>,
    ) -> Result<(RouteSet, NaiveDateTime), PlanError> {
        let mut current_time = start_time.unwrap_or_else(|| self.default_start());
        let mut routes = RouteSet::new();

        for (start_point, destination) in pairs {
            let (plan, next) = self
                .plan(start_point, std::slice::from_ref(destination), Some(current_time))
                .await?;
            routes.push(plan);
            current_time = next;
        }

        info!(routes = routes.len(), "planned route set");
        Ok((routes, current_time))
    }
}
