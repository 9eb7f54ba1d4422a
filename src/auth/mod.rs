//! Authentication and session management for the Stockroom API

mod session;
mod types;

pub use session::*;
pub use types::*;

use crate::error::Error;
use crate::transport::Transport;
use crate::vault;

/// Client for authentication and session state
#[derive(Clone)]
pub struct Auth {
    transport: Transport,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Sign in with a username and password
    ///
    /// On success the session is installed in memory and, when
    /// `persist_session` is enabled, written to the device store under the
    /// `authToken`/`userData`/`userType` keys.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        let request = self.transport.post("/auth/login").json(credentials)?;
        let response: AuthResponse = self.transport.run(request).await?;

        let session = Session::new(response.token, response.user, response.user_type);
        self.transport.install_session(session.clone());
        if self.transport.options().persist_session {
            self.persist(&session);
        }

        Ok(session)
    }

    /// Register a new account
    pub async fn register(&self, account: &NewAccount) -> Result<User, Error> {
        let request = self.transport.post("/auth/register").json(account)?;
        self.transport.run(request).await
    }

    /// Sign out the current user
    ///
    /// The server call is best effort: whatever it returns, the in-memory
    /// session and the persisted auth keys are always cleared.
    pub async fn logout(&self) -> Result<(), Error> {
        if self.transport.current_session().is_some() {
            let request = self.transport.post("/auth/logout");
            if let Err(err) = self.transport.run_empty(request).await {
                log::warn!("logout request failed, clearing local session anyway: {}", err);
            }
        }

        self.transport.clear_local_session();
        Ok(())
    }

    /// Fetch the signed-in user's record from the server
    pub async fn current_user(&self) -> Result<User, Error> {
        if self.transport.current_session().is_none() {
            return Err(Error::auth("not logged in"));
        }

        let request = self.transport.get("/auth/me");
        self.transport.run(request).await
    }

    /// Reinstate a persisted session from the device store
    ///
    /// Returns the session when all required keys were present and
    /// readable. Partial or corrupt data leaves the client signed out.
    pub fn restore_session(&self) -> Option<Session> {
        let store = self.transport.vault();

        let token = store.get(vault::KEY_AUTH_TOKEN)?;
        let user: User = serde_json::from_str(&store.get(vault::KEY_USER_DATA)?).ok()?;
        let user_type = store.get(vault::KEY_USER_TYPE).unwrap_or_default();

        let session = Session::new(token, user, user_type);
        self.transport.install_session(session.clone());
        log::debug!("restored persisted session for {}", session.user.username);
        Some(session)
    }

    /// Get the current session
    pub fn get_session(&self) -> Option<Session> {
        self.transport.current_session()
    }

    /// Set the session
    pub fn set_session(&self, session: Session) {
        self.transport.install_session(session);
    }

    /// Whether a session is currently installed
    pub fn is_authenticated(&self) -> bool {
        self.transport.current_session().is_some()
    }

    fn persist(&self, session: &Session) {
        let user_json = match serde_json::to_string(&session.user) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("failed to serialize user for session storage: {}", err);
                return;
            }
        };

        let store = self.transport.vault();
        let entries = [
            (vault::KEY_AUTH_TOKEN, session.token.as_str()),
            (vault::KEY_USER_DATA, user_json.as_str()),
            (vault::KEY_USER_TYPE, session.user_type.as_str()),
        ];
        for (key, value) in entries {
            if let Err(err) = store.set(key, value) {
                log::warn!("failed to persist {}: {}", key, err);
            }
        }
    }
}
