//! Role-gated navigation endpoints.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::access::{navigation, resolve, NavItem, Route, RouteDecision};
use crate::identity::Role;

use super::extract::CurrentIdentity;

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub role: Role,
    pub role_label: &'static str,
    pub landing: Route,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub requested: String,
    pub decision: RouteDecision,
    /// Path of the screen that ends up rendered
    pub target_path: &'static str,
}

/// GET /api/v1/navigation
pub async fn get_navigation(CurrentIdentity(identity): CurrentIdentity) -> Json<NavigationResponse> {
    let role = identity.role();
    Json(NavigationResponse {
        role,
        role_label: role.label(),
        landing: role.landing_route(),
        items: navigation(role),
    })
}

/// GET /api/v1/routes/resolve?path=/analytics
#[tracing::instrument(name = "http.resolve_route", skip(identity))]
pub async fn resolve_route(
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<ResolveQuery>,
) -> Json<ResolveResponse> {
    let decision = resolve(identity.role(), &query.path);
    Json(ResolveResponse {
        requested: query.path,
        decision,
        target_path: decision.route().path(),
    })
}
