//! Local client state
//!
//! Small JSON files, one per key, mirroring the narrowly scoped storage the
//! admin console and booking site keep between navigations: the signed-in
//! username, a cached profile, the language preference, per-catalog admin
//! draft overrides, and the single pending-reservation snapshot. Writes are
//! last-writer-wins; the store is single-user by construction.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::models::{Group, Hotel, LastReservation, Transfer, UserProfile};

/// Well-known storage keys
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const PROFILE: &str = "profile";
    pub const LANGUAGE: &str = "language";
    pub const LAST_RESERVATION: &str = "last_reservation";
    pub const HOTEL_DRAFTS: &str = "hotel_drafts";
    pub const GROUP_DRAFTS: &str = "group_drafts";
    pub const TRANSFER_DRAFTS: &str = "transfer_drafts";
}

/// File-backed key-value store for client state
#[derive(Debug, Clone)]
pub struct ClientStorage {
    dir: PathBuf,
}

impl ClientStorage {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Save a value under a key, overwriting any prior value
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)
    }

    /// Load a value, `None` when absent or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let json = fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check whether a key has a stored value
    pub fn exists(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// Delete a key
    pub fn delete(&self, key: &str) -> std::io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Storage root
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ========== Typed accessors ==========

    pub fn username(&self) -> Option<String> {
        self.load(keys::USERNAME)
    }

    pub fn set_username(&self, username: &str) -> std::io::Result<()> {
        self.save(keys::USERNAME, &username)
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.load(keys::PROFILE)
    }

    pub fn set_profile(&self, profile: &UserProfile) -> std::io::Result<()> {
        self.save(keys::PROFILE, profile)
    }

    /// Clear the signed-in identity (on logout or failed verification)
    pub fn clear_identity(&self) -> std::io::Result<()> {
        self.delete(keys::USERNAME)?;
        self.delete(keys::PROFILE)
    }

    pub fn language(&self) -> Option<String> {
        self.load(keys::LANGUAGE)
    }

    pub fn set_language(&self, language: &str) -> std::io::Result<()> {
        self.save(keys::LANGUAGE, &language)
    }

    pub fn last_reservation(&self) -> Option<LastReservation> {
        self.load(keys::LAST_RESERVATION)
    }

    pub fn set_last_reservation(&self, snapshot: &LastReservation) -> std::io::Result<()> {
        self.save(keys::LAST_RESERVATION, snapshot)
    }

    pub fn clear_last_reservation(&self) -> std::io::Result<()> {
        self.delete(keys::LAST_RESERVATION)
    }

    // Admin edit drafts, kept locally until submitted

    pub fn hotel_drafts(&self) -> Vec<Hotel> {
        self.load(keys::HOTEL_DRAFTS).unwrap_or_default()
    }

    pub fn set_hotel_drafts(&self, drafts: &[Hotel]) -> std::io::Result<()> {
        self.save(keys::HOTEL_DRAFTS, &drafts)
    }

    pub fn group_drafts(&self) -> Vec<Group> {
        self.load(keys::GROUP_DRAFTS).unwrap_or_default()
    }

    pub fn set_group_drafts(&self, drafts: &[Group]) -> std::io::Result<()> {
        self.save(keys::GROUP_DRAFTS, &drafts)
    }

    pub fn transfer_drafts(&self) -> Vec<Transfer> {
        self.load(keys::TRANSFER_DRAFTS).unwrap_or_default()
    }

    pub fn set_transfer_drafts(&self, drafts: &[Transfer]) -> std::io::Result<()> {
        self.save(keys::TRANSFER_DRAFTS, &drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_delete_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = ClientStorage::new(dir.path());

        storage.set_username("admin").unwrap();
        assert!(storage.exists(keys::USERNAME));
        assert_eq!(storage.username().as_deref(), Some("admin"));

        storage.clear_identity().unwrap();
        assert!(storage.username().is_none());
        assert!(!storage.exists(keys::USERNAME));
    }

    #[test]
    fn snapshot_overwrites_prior_value() {
        let dir = TempDir::new().unwrap();
        let storage = ClientStorage::new(dir.path());

        let mut snap = LastReservation {
            reservation_type: shared::types::ReservationType::Hotel,
            amount: 100,
            customer_name: "A".into(),
            customer_phone: "07701".into(),
            customer_email: "a@b.cd".into(),
            invoice_id: "INV-1".into(),
            payment_id: None,
            created_at: chrono::Utc::now(),
        };
        storage.set_last_reservation(&snap).unwrap();

        snap.invoice_id = "INV-2".into();
        storage.set_last_reservation(&snap).unwrap();

        let loaded = storage.last_reservation().unwrap();
        assert_eq!(loaded.invoice_id, "INV-2");
    }

    #[test]
    fn missing_keys_load_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = ClientStorage::new(dir.path());
        assert!(storage.last_reservation().is_none());
        assert!(storage.hotel_drafts().is_empty());
    }
}
