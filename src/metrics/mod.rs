//! Prometheus metrics for the command center service.
//!
//! - Session metrics (login attempts by outcome, logouts, signed-in gauge)
//! - Notification metrics (created by category, marked read, unread per role)
//! - Threat report metrics (submitted by priority)

mod helpers;

pub use helpers::{encode_metrics, NotificationMetrics, ReportMetrics, SessionMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, register_int_gauge_vec,
    IntCounter, IntCounterVec, IntGauge, IntGaugeVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "command_center";

lazy_static! {
    // ============================================================================
    // Session Metrics
    // ============================================================================

    /// Login attempts by outcome
    pub static ref LOGIN_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_login_attempts_total", METRIC_PREFIX),
        "Total login attempts",
        &["outcome"]
    ).unwrap();

    /// Total logouts
    pub static ref LOGOUTS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_logouts_total", METRIC_PREFIX),
        "Total logouts"
    ).unwrap();

    /// Whether an identity is currently signed in (1 = yes, 0 = no)
    pub static ref SESSION_ACTIVE: IntGauge = register_int_gauge!(
        format!("{}_session_active", METRIC_PREFIX),
        "Whether an identity is currently signed in (1=yes, 0=no)"
    ).unwrap();

    // ============================================================================
    // Notification Metrics
    // ============================================================================

    /// Notifications created by category
    pub static ref NOTIFICATIONS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_notifications_created_total", METRIC_PREFIX),
        "Total notifications created",
        &["category"]
    ).unwrap();

    /// Notifications transitioned from unread to read
    pub static ref NOTIFICATIONS_READ_TOTAL: IntCounter = register_int_counter!(
        format!("{}_notifications_read_total", METRIC_PREFIX),
        "Total notifications marked as read"
    ).unwrap();

    /// Unread notifications visible to each role
    pub static ref NOTIFICATIONS_UNREAD: IntGaugeVec = register_int_gauge_vec!(
        format!("{}_notifications_unread", METRIC_PREFIX),
        "Unread notifications visible to each role",
        &["role"]
    ).unwrap();

    // ============================================================================
    // Threat Report Metrics
    // ============================================================================

    /// Threat reports submitted by priority
    pub static ref THREAT_REPORTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_threat_reports_total", METRIC_PREFIX),
        "Total threat reports submitted",
        &["priority"]
    ).unwrap();
}
