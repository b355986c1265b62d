//! Sign-in, sign-out and current session endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::access::Route;
use crate::error::{AppError, Result};
use crate::identity::Identity;
use crate::server::AppState;

use super::extract::CurrentIdentity;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub identity: Identity,
    pub role_label: &'static str,
    pub landing: Route,
    pub landing_path: &'static str,
}

impl From<Identity> for SessionResponse {
    fn from(identity: Identity) -> Self {
        let role = identity.role();
        Self {
            identity,
            role_label: role.label(),
            landing: role.landing_route(),
            landing_path: role.landing_route().path(),
        }
    }
}

/// POST /api/v1/session/login
#[tracing::instrument(
    name = "http.login",
    skip(state, request),
    fields(username = %request.username)
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    state
        .identity
        .login_identity(&request.username, &request.password)?
        .map(|identity| Json(identity.into()))
        .ok_or(AppError::InvalidCredentials)
}

/// POST /api/v1/session/logout - idempotent
#[tracing::instrument(name = "http.logout", skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode> {
    state.identity.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/session
pub async fn current_session(CurrentIdentity(identity): CurrentIdentity) -> Json<SessionResponse> {
    Json(identity.into())
}
