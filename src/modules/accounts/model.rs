use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single registered account as stored on disk
///
/// The on-disk record keeps the historical field name `password` for the
/// hash token; the plaintext password is never stored anywhere.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    /// None until the first successful login, then updated on every one
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a fresh account that has never logged in
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            last_login: None,
        }
    }
}

/// Read-only listing projection returned by the store; password hashes
/// stay internal
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub username: String,
    pub last_login: Option<DateTime<Utc>>,
}
