//! Threat reports filed by field agents.
//!
//! Submitting a report notifies every commander through the notification
//! router; the desk is the only collaborator that creates notifications on
//! its own.

mod desk;
mod types;

pub use desk::ThreatReportDesk;
pub use types::{
    Coordinates, ReportError, ReportReceipt, SubmittedReport, ThreatCategory, ThreatPriority,
    ThreatReport, Urgency,
};
