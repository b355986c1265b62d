//! Notification feed endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::access::badge_label;
use crate::error::{AppError, Result};
use crate::notification::{Audience, Notification, NotificationCategory, NotificationId};
use crate::server::AppState;

use super::extract::CurrentIdentity;

#[derive(Debug, Serialize)]
pub struct NotificationFeedResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    /// Bell badge text; absent when nothing is unread
    pub badge: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub target: Audience,
}

/// GET /api/v1/notifications - feed for the signed-in role
pub async fn list_notifications(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<NotificationFeedResponse> {
    let (notifications, unread_count) = state.notifications.feed_for(identity.role());

    Json(NotificationFeedResponse {
        notifications,
        unread_count,
        badge: badge_label(unread_count),
    })
}

/// POST /api/v1/notifications
#[tracing::instrument(
    name = "http.create_notification",
    skip(state, identity, request),
    fields(created_by = %identity.username)
)]
pub async fn create_notification(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>)> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let notification = state.notifications.create(
        request.title,
        request.message,
        request.category,
        request.target,
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

/// POST /api/v1/notifications/{id}/read
///
/// Always answers 204; ids that do not exist (or cannot exist) are ignored.
#[tracing::instrument(name = "http.mark_notification_read", skip(state, _identity))]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    _identity: CurrentIdentity,
    Path(id): Path<String>,
) -> StatusCode {
    match id.parse::<NotificationId>() {
        Ok(id) => state.notifications.mark_read(id),
        Err(_) => tracing::debug!(id = %id, "Ignoring malformed notification id"),
    }
    StatusCode::NO_CONTENT
}
