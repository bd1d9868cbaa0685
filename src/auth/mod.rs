//! Login, role resolution and session persistence

mod roles;
mod session;

use crate::config::ClientOptions;
use crate::error::Error;
use log::info;
use serde::{Deserialize, Serialize};

pub use roles::{resolve_role, Role};
pub use session::SessionStore;

/// The logged-in clinician
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The email entered at login
    pub email: String,

    /// The resolved access role
    pub role: Role,

    /// Display name, derived as the local part of the email
    pub name: String,
}

/// Client for login and session management
pub struct Auth {
    options: ClientOptions,
    store: SessionStore,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(options: ClientOptions) -> Self {
        let store = SessionStore::new(options.session_path.clone());
        Self { options, store }
    }

    /// Log a clinician in: resolve the role from the configured allow-list
    /// and staff domains, derive the display name, persist the session.
    pub fn login(&self, email: &str) -> Result<User, Error> {
        let role = resolve_role(email, &self.options.admin_emails, &self.options.staff_domains);
        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            email: email.to_string(),
            role,
            name,
        };
        self.store.save(&user)?;
        info!("logged in {} as {}", user.email, user.role);
        Ok(user)
    }

    /// The persisted user from a previous run, if any
    pub fn current_user(&self) -> Result<Option<User>, Error> {
        self.store.load()
    }

    /// Clear the persisted session
    pub fn logout(&self) -> Result<(), Error> {
        self.store.clear()?;
        info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_in(dir: &tempfile::TempDir) -> Auth {
        let options = ClientOptions::default()
            .with_admin_emails(["admin@x"])
            .with_session_path(dir.path().join("session.json"));
        Auth::new(options)
    }

    #[test]
    fn login_resolves_role_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth_in(&dir);

        let user = auth.login("admin@x").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "admin");

        let restored = auth.current_user().unwrap().unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn login_derives_name_from_local_part() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth_in(&dir);
        let user = auth.login("doc@hospital.com").unwrap();
        assert_eq!(user.name, "doc");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn logout_clears_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth_in(&dir);
        auth.login("guest@example.com").unwrap();
        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());
    }
}
