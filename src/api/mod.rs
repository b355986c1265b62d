//! API layer - HTTP endpoint handlers organized by concern.
//!
//! These endpoints stand in for the dashboard's view layer: they read the
//! current identity, pass its role into the notification router, and render
//! the result as JSON.

mod extract;
mod health;
mod metrics;
mod navigation;
mod notifications;
mod reports;
mod routes;
mod session;

pub use extract::CurrentIdentity;
pub use health::health;
pub use metrics::prometheus_metrics;
pub use navigation::{get_navigation, resolve_route};
pub use notifications::{create_notification, list_notifications, mark_notification_read};
pub use reports::{list_threat_reports, submit_threat_report};
pub use routes::api_routes;
pub use session::{current_session, login, logout};
