//! Request extractor for the signed-in identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::identity::Identity;
use crate::server::AppState;

/// Present in a handler means somebody is signed in.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .identity
            .current_identity()
            .map(CurrentIdentity)
            .ok_or_else(|| AppError::Auth("Not signed in".to_string()))
    }
}
