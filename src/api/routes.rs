use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::health;
use super::navigation::{get_navigation, resolve_route};
use super::notifications::{create_notification, list_notifications, mark_notification_read};
use super::reports::{list_threat_reports, submit_threat_report};
use super::session::{current_session, login, logout};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new()
                // Session
                .route("/session", get(current_session))
                .route("/session/login", post(login))
                .route("/session/logout", post(logout))
                // Role-gated screens
                .route("/navigation", get(get_navigation))
                .route("/routes/resolve", get(resolve_route))
                // Notification feed
                .route(
                    "/notifications",
                    get(list_notifications).post(create_notification),
                )
                .route("/notifications/{id}/read", post(mark_notification_read))
                // Threat reports
                .route(
                    "/reports/threats",
                    get(list_threat_reports).post(submit_threat_report),
                ),
        )
}
