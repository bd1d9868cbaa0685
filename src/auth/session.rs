//! File-backed session persistence
//!
//! One JSON file holding the logged-in user, used only to skip the login
//! prompt on the next run. No expiry and no integrity check beyond JSON
//! well-formedness; a corrupted file surfaces as a typed error rather than
//! a panic.

use crate::auth::User;
use crate::error::Error;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Saves, loads and clears the single persisted session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store backed by the given file path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and write the user, creating parent directories as needed
    pub fn save(&self, user: &User) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        debug!("session saved for {}", user.email);
        Ok(())
    }

    /// Load the persisted user, if any.
    ///
    /// A missing file is not an error. A file that exists but does not
    /// deserialize is reported as a session error so callers can fall back
    /// to the login prompt instead of crashing.
    pub fn load(&self) -> Result<Option<User>, Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let user = serde_json::from_str::<User>(&raw)
            .map_err(|err| Error::session(format!("corrupted session file: {}", err)))?;
        Ok(Some(user))
    }

    /// Remove the session file; clearing an absent session is a no-op
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let user = User {
            email: "doc@hospital.com".to_string(),
            role: Role::User,
            name: "doc".to_string(),
        };
        store.save(&user).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.email, user.email);
        assert_eq!(loaded.role, user.role);
        assert_eq!(loaded.name, user.name);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupted_file_is_a_session_error() {
        let (_dir, store) = store();
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(Error::Session(_))));
    }

    #[test]
    fn clear_removes_the_file_and_tolerates_absence() {
        let (_dir, store) = store();
        let user = User {
            email: "a@b".to_string(),
            role: Role::Viewer,
            name: "a".to_string(),
        };
        store.save(&user).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
