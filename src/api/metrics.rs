//! Prometheus metrics endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::error::{AppError, Result};
use crate::identity::Role;
use crate::metrics::{self, NotificationMetrics};
use crate::server::AppState;

/// GET /metrics - Prometheus metrics endpoint
pub async fn prometheus_metrics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    update_metrics_from_state(&state);

    let output = metrics::encode_metrics()
        .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {e}")))?;
    Ok((
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        output,
    ))
}

/// Refresh gauges that are derived from current state
fn update_metrics_from_state(state: &AppState) {
    for role in Role::ALL {
        NotificationMetrics::set_unread(role.as_str(), state.notifications.unread_count_for(role));
    }
}
