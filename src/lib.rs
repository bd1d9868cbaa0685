//! SurgiLog Client Library
//!
//! A Rust client for a single-clinic operative-record service backed by a
//! remote spreadsheet endpoint: clinicians log in with an email, submit
//! structured surgical records, browse and search past records, and render
//! a print-formatted report.

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod records;
pub mod reference;
pub mod views;

use reqwest::Client;

use crate::auth::Auth;
use crate::config::ClientOptions;
use crate::records::RecordStoreClient;

/// The main entry point for the SurgiLog client
pub struct SurgiLog {
    /// The record endpoint URL
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Auth client for login and session management
    pub auth: Auth,
    /// Client options
    pub options: ClientOptions,
}

impl SurgiLog {
    /// Create a new SurgiLog client with default options
    ///
    /// # Example
    ///
    /// ```
    /// use surgilog::SurgiLog;
    ///
    /// let client = SurgiLog::new("https://records.example.com/exec");
    /// ```
    pub fn new(endpoint_url: &str) -> Self {
        Self::new_with_options(endpoint_url, ClientOptions::default())
    }

    /// Create a new SurgiLog client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use surgilog::{config::ClientOptions, SurgiLog};
    ///
    /// let options = ClientOptions::default()
    ///     .with_admin_emails(["chief@clinic.test"])
    ///     .with_write_acknowledgment(false);
    /// let client = SurgiLog::new_with_options("https://records.example.com/exec", options);
    /// ```
    pub fn new_with_options(endpoint_url: &str, options: ClientOptions) -> Self {
        let http_client = Client::new();
        let auth = Auth::new(options.clone());

        Self {
            url: endpoint_url.to_string(),
            http_client,
            auth,
            options,
        }
    }

    /// Get a reference to the auth client for login and session management
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Create a record store client for the configured endpoint
    pub fn records(&self) -> RecordStoreClient {
        RecordStoreClient::new(&self.url, self.http_client.clone(), self.options.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::{Role, User};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::records::{RecordCollection, RecordDraft, SurgicalRecord};
    pub use crate::views::{View, ViewController};
    pub use crate::SurgiLog;
}
