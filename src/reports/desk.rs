use std::sync::Arc;

use parking_lot::RwLock;

use crate::identity::{Identity, Role};
use crate::metrics::ReportMetrics;
use crate::notification::{Audience, NotificationCategory, NotificationRouter};

use super::types::{ReportError, ReportReceipt, SubmittedReport, ThreatReport};

/// Accepts threat reports and alerts commanders about them.
pub struct ThreatReportDesk {
    router: Arc<NotificationRouter>,
    reports: RwLock<Vec<SubmittedReport>>,
}

impl ThreatReportDesk {
    pub fn new(router: Arc<NotificationRouter>) -> Self {
        Self {
            router,
            reports: RwLock::new(Vec::new()),
        }
    }

    /// File a report on behalf of `reporter`.
    ///
    /// Only field agents file reports. On success a THREAT_UPLOADED
    /// notification addressed to commanders is created.
    pub fn submit(
        &self,
        reporter: &Identity,
        report: ThreatReport,
    ) -> Result<ReportReceipt, ReportError> {
        match reporter.role() {
            Role::FieldAgent => {}
            Role::Commander => return Err(ReportError::Forbidden(reporter.role())),
        }
        report.validate()?;

        let notification = self.router.create(
            "New Threat Reported",
            format!(
                "{} priority threat reported: {}",
                report.priority.as_str(),
                report.title
            ),
            NotificationCategory::ThreatUploaded,
            Audience::Commander,
        );

        let submitted = SubmittedReport {
            id: format!("threat-{}", notification.id()),
            reported_by: reporter.name.clone(),
            submitted_at: notification.timestamp(),
            report,
        };

        tracing::info!(
            report_id = %submitted.id,
            reported_by = %submitted.reported_by,
            priority = %submitted.report.priority.as_str(),
            category = ?submitted.report.category,
            urgency = ?submitted.report.urgency,
            location = %submitted.report.location,
            "Threat report submitted"
        );
        ReportMetrics::record_submitted(submitted.report.priority.as_str());

        let receipt = ReportReceipt {
            report_id: submitted.id.clone(),
            notification_id: notification.id(),
            submitted_at: submitted.submitted_at,
        };
        self.reports.write().insert(0, submitted);
        Ok(receipt)
    }

    /// Submitted reports, newest first
    pub fn list(&self) -> Vec<SubmittedReport> {
        self.reports.read().clone()
    }

    pub fn count(&self) -> usize {
        self.reports.read().len()
    }
}
