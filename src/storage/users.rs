//! User store
//!
//! Persists the registered users as one JSON array in a single named slot.
//! The whole list is read and rewritten on every access; there is no
//! locking, so callers must serialize the load, append and save sequence.

use log::{info, warn};

use super::slot::KeyValueStorage;
use crate::auth::credentials::UserRecord;
use crate::error::StoreError;

/// Default slot holding the user list.
pub const DEFAULT_SLOT: &str = "users";

pub struct UserStore<S> {
    storage: S,
    slot: String,
}

impl<S: KeyValueStorage> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads every stored user. An absent or corrupt slot yields an empty list.
    pub fn load_all(&self) -> Vec<UserRecord> {
        let Some(raw) = self.storage.get_item(&self.slot) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(users) => users,
            Err(e) => {
                warn!(
                    "Slot {} holds unreadable user data, treating it as empty: {}",
                    self.slot, e
                );
                Vec::new()
            }
        }
    }

    /// Replaces the stored list with `users`.
    pub fn save_all(&mut self, users: &[UserRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(users)?;
        self.storage.set_item(&self.slot, &json)
    }

    /// Case-insensitive lookup by username.
    pub fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        let folded = username.to_lowercase();
        self.load_all()
            .into_iter()
            .find(|user| user.username == folded)
    }

    /// Appends one record and persists the updated list.
    pub fn append(&mut self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.load_all();
        let username = record.username.clone();
        users.push(record);
        self.save_all(&users)?;
        info!("Stored user {} ({} total)", username, users.len());
        Ok(())
    }
}
