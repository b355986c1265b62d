//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub session: SessionHealthResponse,
    pub notifications: NotificationHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct SessionHealthResponse {
    pub storage_backend: String,
    pub signed_in: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationHealthResponse {
    pub total: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        session: SessionHealthResponse {
            storage_backend: state.identity.storage_backend().to_string(),
            signed_in: state.identity.is_signed_in(),
        },
        notifications: NotificationHealthResponse {
            total: state.notifications.len(),
        },
    })
}
