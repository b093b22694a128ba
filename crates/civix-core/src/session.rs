//! Application session
//!
//! The owning root for all shared state: the lifecycle controller (which
//! owns the issue store), the feedback store and the profile store. Front
//! ends hold one session and borrow down into it.

use crate::Result;
use crate::config::Config;
use crate::lifecycle::Lifecycle;
use crate::profile::ProfileStore;
use crate::seed;
use crate::storage::Storage;
use crate::store::{FeedbackStore, IssueStore};

pub struct Session {
    pub lifecycle: Lifecycle,
    pub feedback: FeedbackStore,
    pub profile: ProfileStore,
    pub config: Config,
}

impl Session {
    /// Open a session: seed both stores and load the persisted profile
    pub fn open(config: Config) -> Result<Self> {
        let storage = match &config.storage_dir {
            Some(dir) => Storage::open_at(dir.clone())?,
            None => Storage::open_default()?,
        };
        Self::with_storage(config, storage)
    }

    /// Open a session against explicit storage
    pub fn with_storage(config: Config, storage: Storage) -> Result<Self> {
        let store = IssueStore::from_issues(seed::seed_issues());
        let lifecycle = Lifecycle::new(store, config.default_department.clone());
        let feedback = FeedbackStore::from_entries(seed::seed_feedback());
        let profile = ProfileStore::load(storage)?;
        Ok(Self {
            lifecycle,
            feedback,
            profile,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_both_stores() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(tmp.path().to_path_buf()).unwrap();
        let session = Session::with_storage(Config::default(), storage).unwrap();
        assert_eq!(session.lifecycle.store().len(), 7);
        assert_eq!(session.feedback.len(), 5);
        assert_eq!(session.profile.get().name, "Admin User");
    }
}
