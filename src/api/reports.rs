//! Threat report endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::identity::Role;
use crate::reports::{ReportReceipt, SubmittedReport, ThreatReport};
use crate::server::AppState;

use super::extract::CurrentIdentity;

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<SubmittedReport>,
    pub total: usize,
}

/// POST /api/v1/reports/threats - field agents only
#[tracing::instrument(
    name = "http.submit_threat_report",
    skip(state, identity, report),
    fields(reporter = %identity.username)
)]
pub async fn submit_threat_report(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(report): Json<ThreatReport>,
) -> Result<(StatusCode, Json<ReportReceipt>)> {
    let receipt = state.reports.submit(&identity, report)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/v1/reports/threats - commanders only
pub async fn list_threat_reports(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Result<Json<ReportListResponse>> {
    match identity.role() {
        Role::Commander => {}
        Role::FieldAgent => {
            return Err(AppError::Forbidden(
                "Only commanders may review threat reports".to_string(),
            ))
        }
    }

    let reports = state.reports.list();
    let total = reports.len();
    Ok(Json(ReportListResponse { reports, total }))
}
