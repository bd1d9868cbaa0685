//! Configuration options for the SurgiLog client

use std::path::PathBuf;
use std::time::Duration;

/// The session file name under the data directory.
const SESSION_FILE: &str = "session.json";

/// Configuration options for the SurgiLog client.
///
/// Everything the original deployment hardcoded per site (endpoint URL,
/// admin allow-list, staff domains) is injected here at startup so the
/// client is environment-portable.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Emails granted the ADMIN role, compared lower-cased
    pub admin_emails: Vec<String>,

    /// Email domain suffixes granted the USER role
    pub staff_domains: Vec<String>,

    /// Whether the endpoint returns a readable write response.
    /// When false the client falls back to fire-and-forget writes with a
    /// delayed refetch, matching legacy spreadsheet endpoints whose POST
    /// responses cannot be read.
    pub write_acknowledgment: bool,

    /// How long to wait after a fire-and-forget write before refetching
    pub sync_delay: Duration,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Where the session file lives; defaults to the platform data dir
    pub session_path: PathBuf,
}

impl Default for ClientOptions {
    fn default() -> Self {
        let session_path = dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("surgilog")
            .join(SESSION_FILE);

        Self {
            admin_emails: Vec::new(),
            staff_domains: vec!["@hospital.com".to_string(), "@gmail.com".to_string()],
            write_acknowledgment: true,
            sync_delay: Duration::from_secs(2),
            request_timeout: Some(Duration::from_secs(30)),
            session_path,
        }
    }
}

impl ClientOptions {
    /// Set the admin allow-list
    pub fn with_admin_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_emails = emails.into_iter().map(Into::into).collect();
        self
    }

    /// Set the staff domain suffixes
    pub fn with_staff_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staff_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether the endpoint acknowledges writes
    pub fn with_write_acknowledgment(mut self, value: bool) -> Self {
        self.write_acknowledgment = value;
        self
    }

    /// Set the post-write sync delay
    pub fn with_sync_delay(mut self, value: Duration) -> Self {
        self.sync_delay = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the session file path
    pub fn with_session_path<P: Into<PathBuf>>(mut self, value: P) -> Self {
        self.session_path = value.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_legacy_staff_domains() {
        let options = ClientOptions::default();
        assert!(options.admin_emails.is_empty());
        assert_eq!(options.staff_domains, vec!["@hospital.com", "@gmail.com"]);
        assert!(options.write_acknowledgment);
    }

    #[test]
    fn builder_methods_chain() {
        let options = ClientOptions::default()
            .with_admin_emails(["chief@clinic.test"])
            .with_write_acknowledgment(false)
            .with_sync_delay(Duration::from_millis(50));
        assert_eq!(options.admin_emails, vec!["chief@clinic.test"]);
        assert!(!options.write_acknowledgment);
        assert_eq!(options.sync_delay, Duration::from_millis(50));
    }
}
