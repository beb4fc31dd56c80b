//! Planning configuration.

use chrono::{Duration, NaiveTime};

use crate::domain::TravelMode;

/// Default stay at each destination (minutes).
pub const DEFAULT_DWELL_MINS: i64 = 60;

/// Configuration parameters for day planning.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Time spent at each destination before leaving for the next (minutes).
    pub dwell_mins: i64,

    /// Time of day a plan starts when no start time is given.
    pub day_start: NaiveTime,

    /// Travel mode for every leg.
    pub mode: TravelMode,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(dwell_mins: i64, day_start: NaiveTime, mode: TravelMode) -> Self {
        Self {
            dwell_mins,
            day_start,
            mode,
        }
    }

    /// Returns the dwell time as a Duration.
    pub fn dwell(&self) -> Duration {
        Duration::minutes(self.dwell_mins)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            dwell_mins: DEFAULT_DWELL_MINS,
            day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            mode: TravelMode::Driving,
        }
    }
}
