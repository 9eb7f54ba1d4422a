//! Session data for the signed-in user

use serde::{Deserialize, Serialize};

use super::types::User;

/// A signed-in session
///
/// `user_type` is assigned by the server and treated as opaque here; the
/// client stores and forwards it but never branches on its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The bearer token sent on authenticated requests
    pub token: String,

    /// The signed-in user
    pub user: User,

    /// The server-assigned role string
    pub user_type: String,
}

impl Session {
    /// Create a new session
    pub fn new(token: String, user: User, user_type: String) -> Self {
        Self {
            token,
            user,
            user_type,
        }
    }
}
