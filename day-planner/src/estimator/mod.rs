//! Travel-time estimation.
//!
//! The estimator is the only place where the wall clock and network I/O
//! enter the planner. Both arrive through injected collaborators: a
//! [`Clock`] and a [`DirectionsService`](crate::directions::DirectionsService).

mod clock;
mod estimate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use estimate::{EstimateError, Estimator, FALLBACK_TRAVEL_MINS};
