//! Key-value persistence for civix
//!
//! One JSON document per key, stored as plain files under a state
//! directory. This is the only durable state in the system; everything
//! else lives for the session.

use std::fs;
use std::path::PathBuf;

use crate::Result;

/// File-backed key-value storage
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open storage rooted at an explicit directory
    pub fn open_at(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open storage in the default state directory
    ///
    /// Uses `$XDG_STATE_HOME/civix`, falling back to
    /// `~/.local/state/civix`.
    pub fn open_default() -> Result<Self> {
        Self::open_at(default_state_dir()?)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw value for a key, if present
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Write the value for a key, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

fn default_state_dir() -> Result<PathBuf> {
    let base = std::env::var("XDG_STATE_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .ok_or_else(|| crate::Error::Config("Could not determine state directory".into()))?;

    Ok(base.join("civix"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(tmp.path().to_path_buf()).unwrap();
        assert!(storage.get("profile").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(tmp.path().to_path_buf()).unwrap();
        storage.set("profile", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.get("profile").unwrap().as_deref(), Some(r#"{"a":1}"#));

        storage.set("profile", r#"{"a":2}"#).unwrap();
        assert_eq!(storage.get("profile").unwrap().as_deref(), Some(r#"{"a":2}"#));
    }
}
