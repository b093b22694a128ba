//! Staff user profile
//!
//! Exactly one profile per installation. Loaded from key-value storage at
//! startup (falling back to a hard-coded default), replaced wholesale and
//! re-persisted on every save.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::storage::Storage;

/// Storage key holding the serialized profile
pub const PROFILE_KEY: &str = "profile";

/// The staff user's profile
///
/// Serialized with camelCase field names; the persisted JSON carries
/// exactly this field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub age: u32,
    pub department: String,
    pub gender: String,
    pub state: String,
    pub country: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@gov.in".to_string(),
            avatar_url: "https://github.com/shadcn.png".to_string(),
            age: 35,
            department: "System Administration".to_string(),
            gender: "Male".to_string(),
            state: "Delhi".to_string(),
            country: "India".to_string(),
        }
    }
}

/// Owns the single in-memory profile and its persistence
#[derive(Debug)]
pub struct ProfileStore {
    storage: Storage,
    profile: UserProfile,
}

impl ProfileStore {
    /// Load the persisted profile, or fall back to the default
    ///
    /// Absence and parse/shape failure are treated alike: a payload that
    /// does not deserialize into the full profile shape is discarded in
    /// favor of the default rather than propagated.
    pub fn load(storage: Storage) -> Result<Self> {
        let profile = match storage.get(PROFILE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => UserProfile::default(),
        };
        Ok(Self { storage, profile })
    }

    pub fn get(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the profile and persist it synchronously
    ///
    /// The caller sees the completed write before this returns, so a
    /// success notification is never shown for a failed save.
    pub fn save(&mut self, profile: UserProfile) -> Result<()> {
        let raw = serde_json::to_string(&profile)?;
        self.storage.set(PROFILE_KEY, &raw)?;
        self.profile = profile;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, Storage) {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(tmp.path().to_path_buf()).unwrap();
        (tmp, storage)
    }

    #[test]
    fn test_load_without_persisted_profile_uses_default() {
        let (_tmp, storage) = storage();
        let store = ProfileStore::load(storage).unwrap();
        assert_eq!(store.get(), &UserProfile::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_tmp, storage) = storage();
        let mut store = ProfileStore::load(storage.clone()).unwrap();

        let profile = UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@gov.in".to_string(),
            age: 42,
            department: "Sanitation".to_string(),
            state: "Karnataka".to_string(),
            ..UserProfile::default()
        };
        store.save(profile.clone()).unwrap();
        assert_eq!(store.get(), &profile);

        let reloaded = ProfileStore::load(storage).unwrap();
        assert_eq!(reloaded.get(), &profile);
    }

    #[test]
    fn test_malformed_payload_falls_back_to_default() {
        let (_tmp, storage) = storage();
        storage.set(PROFILE_KEY, "{not json").unwrap();
        let store = ProfileStore::load(storage.clone()).unwrap();
        assert_eq!(store.get(), &UserProfile::default());

        // parseable but wrong shape
        storage.set(PROFILE_KEY, r#"{"name": 7}"#).unwrap();
        let store = ProfileStore::load(storage).unwrap();
        assert_eq!(store.get(), &UserProfile::default());
    }

    #[test]
    fn test_persisted_layout_uses_camel_case_field_set() {
        let raw = serde_json::to_value(UserProfile::default()).unwrap();
        let obj = raw.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["age", "avatarUrl", "country", "department", "email", "gender", "name", "state"]
        );
    }
}
