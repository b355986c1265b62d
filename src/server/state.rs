use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::identity::{IdentityDirectory, IdentityError, IdentityStore};
use crate::notification::NotificationRouter;
use crate::reports::ThreatReportDesk;
use crate::storage::{create_session_storage, SessionStorage};

/// Application context handed to every handler.
///
/// It owns the identity store and the notification router; handlers read the
/// current role from the former and pass it into the latter.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub identity: Arc<IdentityStore>,
    pub notifications: Arc<NotificationRouter>,
    pub reports: Arc<ThreatReportDesk>,
    pub start_time: Instant,
}

impl AppState {
    /// Build the context using the storage backend named in the settings.
    pub fn new(settings: Settings) -> Result<Self, IdentityError> {
        let storage = create_session_storage(&settings.session);
        Self::with_storage(settings, storage)
    }

    /// Build the context on top of an explicit storage backend.
    pub fn with_storage(
        settings: Settings,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self, IdentityError> {
        let directory = IdentityDirectory::seeded(settings.directory.shared_passphrase.clone());
        let identity = Arc::new(IdentityStore::open(directory, storage, &settings.session)?);

        let notifications = Arc::new(if settings.seed.notifications {
            NotificationRouter::seeded()
        } else {
            NotificationRouter::new()
        });
        let reports = Arc::new(ThreatReportDesk::new(notifications.clone()));

        Ok(Self {
            settings: Arc::new(settings),
            identity,
            notifications,
            reports,
            start_time: Instant::now(),
        })
    }
}
