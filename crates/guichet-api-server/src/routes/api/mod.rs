pub mod v1;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use guichet_orchestrator::TechnicianId;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("technician {0} is not on the roster")]
    UnknownTechnician(TechnicianId),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            ApiError::UnknownTechnician(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status_code,
            Json(json!({ "error": self.to_string(), "code": status_code.as_u16() })),
        )
            .into_response()
    }
}
