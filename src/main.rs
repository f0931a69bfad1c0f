use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kartbook::config::AppConfig;
use kartbook::handlers;
use kartbook::services::activity::{self, simulated::SimulatedActivity};
use kartbook::services::weather::SimulatedWeather;
use kartbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        typing_delay_min_ms = config.typing_delay_min_ms,
        typing_delay_max_ms = config.typing_delay_max_ms,
        session_ttl_minutes = config.session_ttl_minutes,
        "using simulated activity and weather sources"
    );

    let state = Arc::new(AppState::new(
        config.clone(),
        Box::new(SimulatedActivity),
        Box::new(SimulatedWeather::default()),
    ));

    tokio::spawn(activity::run_feed(state.clone()));

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
