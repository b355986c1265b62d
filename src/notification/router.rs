use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::identity::Role;
use crate::metrics::NotificationMetrics;

use super::types::{Audience, Notification, NotificationCategory, NotificationId};

#[derive(Debug, Default)]
struct RouterState {
    /// Newest first
    entries: Vec<Notification>,
    last_id: u64,
}

impl RouterState {
    fn next_id(&mut self, timestamp: DateTime<Utc>) -> NotificationId {
        let millis = u64::try_from(timestamp.timestamp_millis()).unwrap_or(0);
        self.last_id = millis.max(self.last_id + 1);
        NotificationId::new(self.last_id)
    }
}

/// Owns the session's notification feed and answers per-role queries.
///
/// Notifications are never removed; only their read flag changes.
#[derive(Debug, Default)]
pub struct NotificationRouter {
    state: RwLock<RouterState>,
}

impl NotificationRouter {
    /// Create an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router holding the demo notifications shown on first load
    pub fn seeded() -> Self {
        let router = Self::new();
        let now = Utc::now();
        {
            let mut state = router.state.write();
            // Oldest first, since each insert goes to the front
            Self::insert(
                &mut state,
                "Status Updated",
                "Perimeter breach investigation completed",
                NotificationCategory::StatusUpdated,
                Audience::FieldAgent,
                now - Duration::minutes(5),
            );
            Self::insert(
                &mut state,
                "New Threat Reported",
                "Critical threat reported in Sector Alpha-7",
                NotificationCategory::ThreatUploaded,
                Audience::Commander,
                now,
            );
        }
        router
    }

    fn insert(
        state: &mut RouterState,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        target: Audience,
        timestamp: DateTime<Utc>,
    ) -> Notification {
        let id = state.next_id(timestamp);
        let notification = Notification::new(
            id,
            title.into(),
            message.into(),
            category,
            timestamp,
            target,
        );
        state.entries.insert(0, notification.clone());
        notification
    }

    /// Create a notification and place it at the front of the feed.
    ///
    /// Title and message are not validated here; callers reject blank input.
    pub fn create(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        target: Audience,
    ) -> Notification {
        let mut state = self.state.write();
        let notification = Self::insert(&mut state, title, message, category, target, Utc::now());
        NotificationMetrics::record_created(category.as_str());

        tracing::info!(
            notification_id = %notification.id(),
            category = %category.as_str(),
            audience = ?target,
            "Notification created"
        );

        notification
    }

    /// Mark a notification as read. Unknown ids and already-read
    /// notifications are left alone.
    pub fn mark_read(&self, id: NotificationId) {
        let mut state = self.state.write();
        match state.entries.iter_mut().find(|n| n.id() == id) {
            Some(notification) => {
                if notification.mark_read() {
                    NotificationMetrics::record_read();
                    tracing::debug!(notification_id = %id, "Notification marked read");
                }
            }
            None => {
                tracing::debug!(notification_id = %id, "mark_read for unknown notification");
            }
        }
    }

    /// Notifications addressed to `role` or to every role, newest first
    pub fn visible_for(&self, role: Role) -> Vec<Notification> {
        self.state
            .read()
            .entries
            .iter()
            .filter(|n| n.is_visible_to(role))
            .cloned()
            .collect()
    }

    /// Number of unread notifications in `visible_for(role)`
    pub fn unread_count_for(&self, role: Role) -> usize {
        self.state
            .read()
            .entries
            .iter()
            .filter(|n| n.is_visible_to(role) && !n.is_read())
            .count()
    }

    /// `visible_for(role)` together with its unread count, read under one lock
    pub fn feed_for(&self, role: Role) -> (Vec<Notification>, usize) {
        let state = self.state.read();
        let visible: Vec<Notification> = state
            .entries
            .iter()
            .filter(|n| n.is_visible_to(role))
            .cloned()
            .collect();
        let unread = visible.iter().filter(|n| !n.is_read()).count();
        (visible, unread)
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.state
            .read()
            .entries
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    /// Total notifications, regardless of audience
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unread_in(visible: &[Notification]) -> usize {
        visible.iter().filter(|n| !n.is_read()).count()
    }

    #[test]
    fn test_create_prepends_unread() {
        let router = NotificationRouter::new();

        let first = router.create("A", "first", NotificationCategory::SystemAlert, Audience::All);
        let second = router.create("B", "second", NotificationCategory::SystemAlert, Audience::All);

        assert!(!first.is_read());
        assert!(second.id() > first.id());

        let visible = router.visible_for(Role::Commander);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id(), second.id());
        assert_eq!(visible[1].id(), first.id());
    }

    #[test]
    fn test_ids_are_unique_within_one_millisecond() {
        let router = NotificationRouter::new();
        let ids: Vec<_> = (0..50)
            .map(|i| {
                router
                    .create(format!("t{i}"), "m", NotificationCategory::SystemAlert, Audience::All)
                    .id()
            })
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_scenario_commander_and_all() {
        let router = NotificationRouter::new();
        let n1 = router.create(
            "N1",
            "commander only",
            NotificationCategory::ThreatUploaded,
            Audience::Commander,
        );
        let n2 = router.create("N2", "everyone", NotificationCategory::SystemAlert, Audience::All);

        let commander_view = router.visible_for(Role::Commander);
        assert_eq!(
            commander_view.iter().map(Notification::id).collect::<Vec<_>>(),
            vec![n2.id(), n1.id()]
        );
        assert_eq!(router.unread_count_for(Role::Commander), 2);

        let agent_view = router.visible_for(Role::FieldAgent);
        assert_eq!(agent_view.len(), 1);
        assert_eq!(agent_view[0].id(), n2.id());
        assert_eq!(router.unread_count_for(Role::FieldAgent), 1);

        router.mark_read(n2.id());
        assert_eq!(router.unread_count_for(Role::FieldAgent), 0);
        assert_eq!(router.unread_count_for(Role::Commander), 1);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let router = NotificationRouter::new();
        let n = router.create("T", "M", NotificationCategory::StatusUpdated, Audience::FieldAgent);

        router.mark_read(n.id());
        let once = router.get(n.id()).unwrap();
        router.mark_read(n.id());
        let twice = router.get(n.id()).unwrap();

        assert!(once.is_read());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let router = NotificationRouter::seeded();
        let before = router.visible_for(Role::Commander);

        router.mark_read(NotificationId::new(42));

        assert_eq!(router.visible_for(Role::Commander), before);
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_visible_for_does_not_mark_read() {
        let router = NotificationRouter::seeded();
        let _ = router.visible_for(Role::Commander);
        let _ = router.visible_for(Role::Commander);
        assert_eq!(router.unread_count_for(Role::Commander), 1);
    }

    #[test]
    fn test_unread_count_matches_visible_filter() {
        let router = NotificationRouter::seeded();
        let a = router.create("a", "m", NotificationCategory::MissionAssigned, Audience::All);
        router.create("b", "m", NotificationCategory::MissionAssigned, Audience::FieldAgent);
        router.create("c", "m", NotificationCategory::SystemAlert, Audience::Commander);
        router.mark_read(a.id());

        for role in Role::ALL {
            assert_eq!(
                router.unread_count_for(role),
                unread_in(&router.visible_for(role))
            );
        }
    }

    #[test]
    fn test_feed_for_matches_separate_queries() {
        let router = NotificationRouter::seeded();
        let n = router.create("a", "m", NotificationCategory::SystemAlert, Audience::All);
        router.mark_read(n.id());

        for role in Role::ALL {
            let (visible, unread) = router.feed_for(role);
            assert_eq!(visible, router.visible_for(role));
            assert_eq!(unread, router.unread_count_for(role));
        }
    }

    #[test]
    fn test_seeded_feed() {
        let router = NotificationRouter::seeded();
        assert_eq!(router.len(), 2);

        let commander = router.visible_for(Role::Commander);
        assert_eq!(commander.len(), 1);
        assert_eq!(commander[0].title(), "New Threat Reported");
        assert_eq!(commander[0].message(), "Critical threat reported in Sector Alpha-7");
        assert_eq!(commander[0].category(), NotificationCategory::ThreatUploaded);

        let agent = router.visible_for(Role::FieldAgent);
        assert_eq!(agent.len(), 1);
        assert_eq!(agent[0].title(), "Status Updated");
        assert!(agent[0].timestamp() < commander[0].timestamp());
        assert!(agent[0].id() < commander[0].id());
    }

    #[test]
    fn test_all_audience_reaches_every_role() {
        let router = NotificationRouter::new();
        let n = router.create("Drill", "Sirens at 1400", NotificationCategory::SystemAlert, Audience::All);

        for role in Role::ALL {
            assert!(router.visible_for(role).iter().any(|v| v.id() == n.id()));
        }
    }
}
