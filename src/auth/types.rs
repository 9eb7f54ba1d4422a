//! Types for authentication and account management

use serde::{Deserialize, Serialize};

/// User data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user ID
    pub id: i64,

    /// The login name
    pub username: String,

    /// The user's email address
    #[serde(default)]
    pub email: Option<String>,

    /// The user's display name
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// The login name
    pub username: String,

    /// The password
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Payload for registering a new account
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    /// The login name
    pub username: String,

    /// The password
    pub password: String,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Requested role; the server decides what is actually granted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Response from the login endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The bearer token
    pub token: String,

    /// The signed-in user
    pub user: User,

    /// The server-assigned role string
    pub user_type: String,
}
