//! Fixed directory of known identities.
//!
//! The directory is a demo credential scheme: every account is unlocked by
//! one shared passphrase. It performs no per-user credential check and must
//! be replaced before anything real depends on it.

use super::types::{Identity, Role};

/// Pre-seeded identities, one per role.
#[derive(Debug, Clone)]
pub struct IdentityDirectory {
    entries: Vec<Identity>,
    shared_passphrase: String,
}

impl IdentityDirectory {
    /// Build the standard two-entry directory.
    pub fn seeded(shared_passphrase: impl Into<String>) -> Self {
        Self {
            entries: vec![
                Identity::new("1", "commander", "Commander Anil", Role::Commander),
                Identity::new("2", "agent", "Agent Rudra", Role::FieldAgent),
            ],
            shared_passphrase: shared_passphrase.into(),
        }
    }

    /// Look up an identity by login handle
    pub fn find(&self, handle: &str) -> Option<&Identity> {
        self.entries.iter().find(|entry| entry.username == handle)
    }

    /// Return a copy of the matching identity if `handle` is known and
    /// `secret` equals the shared passphrase.
    pub fn authenticate(&self, handle: &str, secret: &str) -> Option<Identity> {
        let identity = self.find(handle)?;
        if secret == self.shared_passphrase {
            Some(identity.clone())
        } else {
            None
        }
    }

    /// Whether a restored snapshot describes a directory entry (same id, handle and role).
    pub fn recognizes(&self, identity: &Identity) -> bool {
        self.find(&identity.username)
            .is_some_and(|entry| entry.id == identity.id && entry.role() == identity.role())
    }

    pub fn entries(&self) -> &[Identity] {
        &self.entries
    }
}
