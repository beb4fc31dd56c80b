//! Day planner.
//!
//! This module turns an ordered list of destinations into a timed
//! itinerary: each leg departs when the previous stay ends, and a single
//! simulated clock can be threaded through several plans back to back.

mod config;
mod plan;


pub use config::{DEFAULT_DWELL_MINS, PlanConfig};
pub use plan::{PlanError, Planner};
