use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use day_planner::config::ServerConfig;
use day_planner::directions::{DirectionsClient, DirectionsConfig};
use day_planner::estimator::Estimator;
use day_planner::planner::PlanConfig;
use day_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("day_planner=info")),
        )
        .init();

    // Fail fast: the API key has no default.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    info!(?config, "loaded configuration");

    // Create the directions client once; every request shares it
    let directions_config = DirectionsConfig::new(&config.api_key)
        .with_base_url(&config.directions_base_url)
        .with_timeout(config.timeout_secs);
    let directions =
        DirectionsClient::new(directions_config).expect("Failed to create directions client");

    let estimator = Estimator::new(Arc::new(directions));

    // Build app state
    let state = AppState::new(estimator, PlanConfig::default());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.addr;
    info!("Day Planner listening on http://{addr}");
    info!("  GET  /            - Route form");
    info!("  GET  /health      - Health check");
    info!("  POST /directions  - Plan routes");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
