use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::validation::ValidationError;
use crate::services::wizard::WizardError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("weather unavailable: {0}")]
    Weather(String),
}

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Invalid(v) => AppError::Validation(v),
            other => AppError::Conflict(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Weather(_) => StatusCode::BAD_GATEWAY,
        };

        let body = match &self {
            AppError::Validation(v) => {
                serde_json::json!({ "error": self.to_string(), "field": v.field() })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
