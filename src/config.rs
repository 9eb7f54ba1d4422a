//! Configuration options for the Stockroom client

use std::time::Duration;

/// Configuration options for the Stockroom client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whether to persist the session to the device key-value store
    pub persist_session: bool,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// The path prefix all API endpoints live under
    pub api_prefix: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            persist_session: true,
            request_timeout: Some(Duration::from_secs(30)),
            api_prefix: "/api".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set whether to persist the session
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the API path prefix
    pub fn with_api_prefix(mut self, value: &str) -> Self {
        self.api_prefix = value.to_string();
        self
    }
}
