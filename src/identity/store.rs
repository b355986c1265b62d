//! The session's single current identity, persisted through session storage.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::config::{RestorePolicy, SessionConfig};
use crate::metrics::SessionMetrics;
use crate::storage::{SessionStorage, StorageError};

use super::directory::IdentityDirectory;
use super::types::{Identity, Role};

/// Errors from the identity store. Rejected credentials are not an error;
/// see [`IdentityStore::login`].
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Holds at most one signed-in identity.
///
/// Every mutation takes the write lock for its whole duration, storage write
/// included, so login and logout never interleave.
pub struct IdentityStore {
    directory: IdentityDirectory,
    storage: Arc<dyn SessionStorage>,
    storage_key: String,
    current: RwLock<Option<Identity>>,
}

impl IdentityStore {
    /// Create a store with nobody signed in, ignoring any persisted snapshot.
    pub fn new(
        directory: IdentityDirectory,
        storage: Arc<dyn SessionStorage>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            storage,
            storage_key: storage_key.into(),
            current: RwLock::new(None),
        }
    }

    /// Create a store and restore the persisted snapshot, if any.
    ///
    /// Under [`RestorePolicy::Trust`] the snapshot becomes the current identity
    /// without any credential check, so anyone able to write session storage
    /// can sign in as anyone. [`RestorePolicy::Directory`] at least requires the
    /// snapshot to match a directory entry. Unreadable snapshots are discarded.
    pub fn open(
        directory: IdentityDirectory,
        storage: Arc<dyn SessionStorage>,
        config: &SessionConfig,
    ) -> Result<Self, IdentityError> {
        let store = Self::new(directory, storage, config.storage_key.clone());
        store.restore(config.restore_policy)?;
        Ok(store)
    }

    fn restore(&self, policy: RestorePolicy) -> Result<(), IdentityError> {
        let Some(raw) = self.storage.get(&self.storage_key)? else {
            tracing::debug!(key = %self.storage_key, "No persisted session snapshot");
            return Ok(());
        };

        let identity = match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(
                    key = %self.storage_key,
                    error = %e,
                    "Discarding unreadable session snapshot"
                );
                self.storage.remove(&self.storage_key)?;
                return Ok(());
            }
        };

        let accepted = match policy {
            RestorePolicy::Trust => true,
            RestorePolicy::Directory => self.directory.recognizes(&identity),
        };

        if !accepted {
            tracing::warn!(
                username = %identity.username,
                role = %identity.role(),
                "Session snapshot does not match the directory, discarding"
            );
            self.storage.remove(&self.storage_key)?;
            return Ok(());
        }

        tracing::info!(
            username = %identity.username,
            role = %identity.role(),
            policy = ?policy,
            "Restored session from snapshot"
        );
        SessionMetrics::set_active(true);
        *self.current.write() = Some(identity);
        Ok(())
    }

    /// Attempt to sign in.
    ///
    /// Returns `Ok(false)` for an unknown handle or wrong secret, leaving the
    /// current identity untouched. `Err` is reserved for storage failures, in
    /// which case the current identity is also left untouched.
    pub fn login(&self, handle: &str, secret: &str) -> Result<bool, IdentityError> {
        Ok(self.login_identity(handle, secret)?.is_some())
    }

    /// Like [`login`](Self::login), but hands back the identity that was
    /// installed, as it was at the moment it became current.
    pub fn login_identity(
        &self,
        handle: &str,
        secret: &str,
    ) -> Result<Option<Identity>, IdentityError> {
        let Some(mut identity) = self.directory.authenticate(handle, secret) else {
            SessionMetrics::record_login_rejected();
            tracing::info!(username = %handle, "Login rejected");
            return Ok(None);
        };

        identity.touch();
        let snapshot = serde_json::to_string(&identity)?;

        let mut current = self.current.write();
        self.storage.set(&self.storage_key, &snapshot)?;

        tracing::info!(
            user_id = %identity.id,
            username = %identity.username,
            role = %identity.role(),
            "Login succeeded"
        );
        SessionMetrics::record_login_success();
        *current = Some(identity.clone());
        Ok(Some(identity))
    }

    /// Sign out. Safe to call when nobody is signed in.
    ///
    /// The in-memory identity is cleared even when removing the snapshot fails.
    pub fn logout(&self) -> Result<(), IdentityError> {
        let mut current = self.current.write();
        let previous = current.take();
        if let Some(identity) = &previous {
            tracing::info!(username = %identity.username, "Logged out");
            SessionMetrics::record_logout();
        }
        self.storage.remove(&self.storage_key)?;
        Ok(())
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.read().clone()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.read().as_ref().map(Identity::role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }

    /// Backend type of the underlying session storage
    pub fn storage_backend(&self) -> &'static str {
        self.storage.backend_type()
    }
}
