//! Shared request transport for the resource clients
//!
//! Every resource call goes through [`Transport`]: it joins paths onto the
//! base URL, attaches the bearer token from the current session, and applies
//! the one cross-cutting response rule the backend contract has: a 401 wipes
//! the local session (memory and device store) before the error reaches the
//! caller.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

use crate::auth::Session;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::FetchBuilder;
use crate::vault::{self, SessionVault};

/// Value sent in the `X-Client-Info` header on every request
pub(crate) const CLIENT_INFO: &str = "stockroom-client/0.2.0";

/// Shared state behind all resource clients
#[derive(Clone)]
pub(crate) struct Transport {
    base_url: String,
    http: Client,
    session: Arc<Mutex<Option<Session>>>,
    vault: Arc<dyn SessionVault>,
    options: ClientOptions,
}

impl Transport {
    pub(crate) fn new(
        base_url: &str,
        http: Client,
        vault: Arc<dyn SessionVault>,
        options: ClientOptions,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session: Arc::new(Mutex::new(None)),
            vault,
            options,
        }
    }

    /// Full URL for an API path such as `/inventory` or `/orders/42`
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.options.api_prefix, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn vault(&self) -> &Arc<dyn SessionVault> {
        &self.vault
    }

    pub(crate) fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The current session's bearer token, when signed in
    pub(crate) fn bearer_token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub(crate) fn current_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Replace the in-memory session
    pub(crate) fn install_session(&self, session: Session) {
        let mut current = self.session.lock().unwrap();
        *current = Some(session);
    }

    /// Drop the in-memory session and the persisted auth keys
    ///
    /// Vault failures are logged and skipped; the in-memory session is
    /// always dropped.
    pub(crate) fn clear_local_session(&self) {
        {
            let mut current = self.session.lock().unwrap();
            *current = None;
        }

        for key in [
            vault::KEY_AUTH_TOKEN,
            vault::KEY_USER_DATA,
            vault::KEY_USER_TYPE,
        ] {
            if let Err(err) = self.vault.remove(key) {
                log::warn!("failed to clear {} from session storage: {}", key, err);
            }
        }
    }

    fn request(&self, method: Method, path: &str) -> FetchBuilder<'_> {
        let url = self.endpoint(path);
        let mut builder =
            FetchBuilder::new(&self.http, &url, method).header("X-Client-Info", CLIENT_INFO);

        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(&token);
        }

        builder
    }

    pub(crate) fn get(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn patch(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> FetchBuilder<'_> {
        self.request(Method::DELETE, path)
    }

    /// Execute a request and decode its payload
    pub(crate) async fn run<T: DeserializeOwned>(
        &self,
        request: FetchBuilder<'_>,
    ) -> Result<T, Error> {
        self.intercept(request.execute().await)
    }

    /// Execute a request whose response body is not needed
    pub(crate) async fn run_empty(&self, request: FetchBuilder<'_>) -> Result<(), Error> {
        self.intercept(request.execute_empty().await)
    }

    /// Apply the 401 side effect to a finished call
    pub(crate) fn intercept<T>(&self, result: Result<T, Error>) -> Result<T, Error> {
        match result {
            Err(Error::Api {
                status: 401,
                message,
            }) => {
                log::warn!("server returned 401, clearing local session");
                self.clear_local_session();
                Err(Error::Unauthorized(message))
            }
            other => other,
        }
    }
}
