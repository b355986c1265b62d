//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{
    LOGIN_ATTEMPTS_TOTAL, LOGOUTS_TOTAL, NOTIFICATIONS_CREATED_TOTAL, NOTIFICATIONS_READ_TOTAL,
    NOTIFICATIONS_UNREAD, SESSION_ACTIVE, THREAT_REPORTS_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording session metrics
pub struct SessionMetrics;

impl SessionMetrics {
    pub fn record_login_success() {
        LOGIN_ATTEMPTS_TOTAL.with_label_values(&["success"]).inc();
        SESSION_ACTIVE.set(1);
    }

    pub fn record_login_rejected() {
        LOGIN_ATTEMPTS_TOTAL
            .with_label_values(&["invalid_credentials"])
            .inc();
    }

    pub fn record_logout() {
        LOGOUTS_TOTAL.inc();
        SESSION_ACTIVE.set(0);
    }

    /// Set the signed-in gauge directly (used after restoring a snapshot)
    pub fn set_active(active: bool) {
        SESSION_ACTIVE.set(i64::from(active));
    }
}

/// Helper struct for recording notification metrics
pub struct NotificationMetrics;

impl NotificationMetrics {
    pub fn record_created(category: &str) {
        NOTIFICATIONS_CREATED_TOTAL
            .with_label_values(&[category])
            .inc();
    }

    pub fn record_read() {
        NOTIFICATIONS_READ_TOTAL.inc();
    }

    pub fn set_unread(role: &str, count: usize) {
        NOTIFICATIONS_UNREAD
            .with_label_values(&[role])
            .set(count as i64);
    }
}

/// Helper struct for recording threat report metrics
pub struct ReportMetrics;

impl ReportMetrics {
    pub fn record_submitted(priority: &str) {
        THREAT_REPORTS_TOTAL.with_label_values(&[priority]).inc();
    }
}
