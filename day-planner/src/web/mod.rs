//! Web layer for the day planner.
//!
//! Provides the entry form and the endpoint that turns submitted
//! start/destination pairs into a rendered day plan.

mod dto;
mod maps;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use maps::directions_url;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
