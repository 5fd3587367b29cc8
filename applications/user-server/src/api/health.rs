/// Health check API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// GET /health - Liveness, never touches the store
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /status - Readiness, 503 when the store cannot be reached
pub async fn status(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    app_state
        .store
        .ping()
        .await
        .map_err(|e| ServerError::Unavailable(e.to_string()))?;

    Ok(Json(HealthResponse::ok()))
}
