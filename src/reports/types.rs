use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Role;
use crate::notification::NotificationId;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Role {0} may not submit threat reports")]
    Forbidden(Role),

    #[error("Invalid report: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl ThreatPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatPriority::Low => "LOW",
            ThreatPriority::Medium => "MEDIUM",
            ThreatPriority::High => "HIGH",
            ThreatPriority::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatCategory {
    #[default]
    Security,
    Cyber,
    Physical,
    Surveillance,
    Communication,
    Other,
}

/// Requested response speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    #[default]
    Normal,
    Expedited,
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A threat report as filled in by a field agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: ThreatPriority,
    pub location: String,
    #[serde(default)]
    pub category: ThreatCategory,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl ThreatReport {
    /// Check required fields and coordinate ranges
    pub fn validate(&self) -> Result<(), ReportError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(ReportError::Validation(format!("{field} is required")));
            }
        }

        if let Some(coordinates) = self.coordinates {
            if !(-90.0..=90.0).contains(&coordinates.lat) {
                return Err(ReportError::Validation(
                    "latitude must be between -90 and 90".to_string(),
                ));
            }
            if !(-180.0..=180.0).contains(&coordinates.lng) {
                return Err(ReportError::Validation(
                    "longitude must be between -180 and 180".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// A report as recorded by the desk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedReport {
    pub id: String,
    pub reported_by: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: ThreatReport,
}

/// Returned to the submitting agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportReceipt {
    pub report_id: String,
    pub notification_id: NotificationId,
    pub submitted_at: DateTime<Utc>,
}
