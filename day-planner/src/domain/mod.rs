//! Domain types for the day planner.
//!
//! Addresses are opaque strings handed straight to the directions service;
//! nothing here geocodes or validates them. Plan entries are built once and
//! only expose read accessors, so a finished day plan cannot drift out of
//! step with its own timing arithmetic.

mod location;
mod plan;
mod time;

pub use location::{Location, TravelMode};
pub use plan::{DayPlan, PlanEntry, RouteSet};
pub use time::{format_duration, format_hhmm};
