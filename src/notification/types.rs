use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Role;

/// Unique notification identifier, derived from the creation time in
/// milliseconds and bumped when needed so that ids strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotificationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationCategory {
    /// A field report about a new threat was filed
    ThreatUploaded,
    /// An incident or mission changed status
    StatusUpdated,
    /// A mission was assigned
    MissionAssigned,
    /// Platform-level alert
    SystemAlert,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::ThreatUploaded => "THREAT_UPLOADED",
            NotificationCategory::StatusUpdated => "STATUS_UPDATED",
            NotificationCategory::MissionAssigned => "MISSION_ASSIGNED",
            NotificationCategory::SystemAlert => "SYSTEM_ALERT",
        }
    }
}

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    Commander,
    FieldAgent,
    /// Every role
    All,
}

impl Audience {
    /// Whether a user holding `role` is part of this audience
    pub fn includes(&self, role: Role) -> bool {
        match (self, role) {
            (Audience::All, _) => true,
            (Audience::Commander, Role::Commander) => true,
            (Audience::FieldAgent, Role::FieldAgent) => true,
            (Audience::Commander, Role::FieldAgent) => false,
            (Audience::FieldAgent, Role::Commander) => false,
        }
    }
}

/// A role-targeted message. Everything but the read flag is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    id: NotificationId,
    title: String,
    message: String,
    category: NotificationCategory,
    timestamp: DateTime<Utc>,
    read: bool,
    target: Audience,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        title: String,
        message: String,
        category: NotificationCategory,
        timestamp: DateTime<Utc>,
        target: Audience,
    ) -> Self {
        Self {
            id,
            title,
            message,
            category,
            timestamp,
            read: false,
            target,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn target(&self) -> Audience {
        self.target
    }

    /// Whether this notification shows up for `role`
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.target.includes(role)
    }

    /// Set the read flag. Returns true if it was unread before.
    pub(crate) fn mark_read(&mut self) -> bool {
        let was_unread = !self.read;
        self.read = true;
        was_unread
    }
}
