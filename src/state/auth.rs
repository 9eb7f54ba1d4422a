//! Auth state container

use std::sync::Arc;

use crate::auth::{Auth, Credentials, Session, User};
use crate::error::Error;
use crate::state::resource::{ResourceAction, ResourceState, Store};

/// What the auth container caches about the signed-in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSnapshot {
    /// The signed-in user, when authenticated
    pub user: Option<User>,

    /// The server-assigned role string
    pub user_type: Option<String>,

    /// Whether a session is active
    pub is_authenticated: bool,
}

impl AuthSnapshot {
    fn signed_in(session: &Session) -> Self {
        Self {
            user: Some(session.user.clone()),
            user_type: Some(session.user_type.clone()),
            is_authenticated: true,
        }
    }

    /// The logged-out state
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// State container for authentication
///
/// Handles are cheap to clone and share one state snapshot.
#[derive(Clone)]
pub struct AuthContainer {
    auth: Auth,
    store: Arc<Store<AuthSnapshot>>,
}

impl AuthContainer {
    pub(crate) fn new(auth: Auth) -> Self {
        Self {
            auth,
            store: Arc::new(Store::new()),
        }
    }

    /// Rehydrate a persisted session from the device store
    ///
    /// Returns whether a session was found.
    pub fn restore(&self) -> bool {
        match self.auth.restore_session() {
            Some(session) => {
                self.store
                    .dispatch(ResourceAction::Loaded(AuthSnapshot::signed_in(&session)));
                true
            }
            None => false,
        }
    }

    /// Sign in and commit the resulting session state
    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        let ticket = self.store.begin();

        match self.auth.login(credentials).await {
            Ok(session) => {
                self.store
                    .settle(ticket, Ok(AuthSnapshot::signed_in(&session)));
                Ok(())
            }
            Err(err) => {
                // A rejected login is a signed-out state with an error, even
                // when an older session was cached
                if self.store.settle(ticket, Err(err.to_string())) {
                    self.store
                        .mutate(|state| state.data = Some(AuthSnapshot::signed_out()));
                }
                Err(err)
            }
        }
    }

    /// Sign out
    ///
    /// The signed-out state is committed unconditionally, whatever the
    /// server or the device store did.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self.auth.logout().await;
        self.store
            .dispatch(ResourceAction::Loaded(AuthSnapshot::signed_out()));
        result
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> ResourceState<AuthSnapshot> {
        self.store.snapshot()
    }

    /// Whether the cached state says a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.store
            .snapshot()
            .data
            .map(|snapshot| snapshot.is_authenticated)
            .unwrap_or(false)
    }
}
