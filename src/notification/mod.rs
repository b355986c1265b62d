//! Role-targeted notifications.
//!
//! The `NotificationRouter` owns the session's feed. Visibility is computed
//! from each notification's target audience and the caller's role; nothing
//! about the reader is stored on the notification except the read flag.

mod router;
mod types;

pub use router::NotificationRouter;
pub use types::{Audience, Notification, NotificationCategory, NotificationId};
