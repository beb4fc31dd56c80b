//! Application state for the web layer.

use std::sync::Arc;

use crate::estimator::Estimator;
use crate::planner::PlanConfig;

/// Shared application state.
///
/// The estimator wraps the single long-lived directions client; nothing in
/// here is mutated by requests.
pub struct AppState<D> {
    /// Travel-time estimator over the directions service
    pub estimator: Arc<Estimator<D>>,

    /// Day planning configuration
    pub config: Arc<PlanConfig>,
}

impl<D> AppState<D> {
    /// Create a new app state.
    pub fn new(estimator: Estimator<D>, config: PlanConfig) -> Self {
        Self {
            estimator: Arc::new(estimator),
            config: Arc::new(config),
        }
    }
}

// Manual impl: deriving would demand `D: Clone`.
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            estimator: Arc::clone(&self.estimator),
            config: Arc::clone(&self.config),
        }
    }
}
