//! Role resolution from email addresses

use serde::{Deserialize, Serialize};

/// The three access roles of the clinic client.
///
/// Resolution is a navigation convenience only: it happens entirely on the
/// client and the record endpoint never sees it, so it must not be treated
/// as a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full navigation: dashboard, new record, search
    Admin,
    /// Clinical staff: dashboard, new record, search
    User,
    /// Read-only: dashboard and search
    Viewer,
}

impl Role {
    /// Whether this role may open the new-record form
    pub fn can_create_records(self) -> bool {
        matches!(self, Role::Admin | Role::User)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Viewer => "VIEWER",
        };
        f.write_str(label)
    }
}

/// Map an email to a role: an exact lower-cased match against the admin
/// allow-list wins, then any configured staff domain substring, else viewer.
/// No email syntax validation is attempted.
pub fn resolve_role(email: &str, admin_emails: &[String], staff_domains: &[String]) -> Role {
    let lowered = email.to_lowercase();
    if admin_emails.iter().any(|a| a.to_lowercase() == lowered) {
        Role::Admin
    } else if staff_domains.iter().any(|d| lowered.contains(&d.to_lowercase())) {
        Role::User
    } else {
        Role::Viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admins() -> Vec<String> {
        vec!["chief@clinic.test".to_string(), "pputkham@gmail.com".to_string()]
    }

    fn domains() -> Vec<String> {
        vec!["@hospital.com".to_string(), "@gmail.com".to_string()]
    }

    #[test]
    fn allow_list_match_is_admin_case_insensitive() {
        assert_eq!(resolve_role("Chief@Clinic.Test", &admins(), &domains()), Role::Admin);
        assert_eq!(resolve_role("PPUTKHAM@GMAIL.COM", &admins(), &domains()), Role::Admin);
    }

    #[test]
    fn staff_domain_match_is_user() {
        assert_eq!(resolve_role("doc@hospital.com", &admins(), &domains()), Role::User);
        assert_eq!(resolve_role("nurse@gmail.com", &admins(), &domains()), Role::User);
    }

    #[test]
    fn allow_list_wins_over_domain() {
        // pputkham@gmail.com also matches @gmail.com
        assert_eq!(resolve_role("pputkham@gmail.com", &admins(), &domains()), Role::Admin);
    }

    #[test]
    fn everything_else_is_viewer() {
        assert_eq!(resolve_role("guest@example.com", &admins(), &domains()), Role::Viewer);
        assert_eq!(resolve_role("not-an-email", &admins(), &domains()), Role::Viewer);
        assert_eq!(resolve_role("", &admins(), &domains()), Role::Viewer);
    }

    #[test]
    fn role_gates_record_creation() {
        assert!(Role::Admin.can_create_records());
        assert!(Role::User.can_create_records());
        assert!(!Role::Viewer.can_create_records());
    }
}
