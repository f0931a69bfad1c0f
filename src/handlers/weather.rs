use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::weather::WeatherReport;
use crate::state::AppState;

#[derive(Serialize)]
pub struct WeatherView {
    #[serde(flatten)]
    pub report: WeatherReport,
    pub description: &'static str,
    pub recommendation: &'static str,
}

// GET /api/weather
pub async fn get_weather(State(state): State<Arc<AppState>>) -> Result<Json<WeatherView>, AppError> {
    if state.config.weather_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.weather_delay_ms)).await;
    }

    let report = state.weather.current().await.map_err(|e| {
        tracing::error!(error = %e, "weather source failed");
        AppError::Weather(e.to_string())
    })?;

    Ok(Json(WeatherView {
        description: report.condition.label(),
        recommendation: report.recommendation(),
        report,
    }))
}
