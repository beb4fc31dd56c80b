//! Day planner server.
//!
//! A web application that answers: "If I drive each of these legs in turn,
//! staying an hour at every stop, when do I leave and arrive?"

pub mod config;
pub mod directions;
pub mod domain;
pub mod estimator;
pub mod planner;
pub mod web;
