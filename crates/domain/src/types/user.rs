//! User account types
//!
//! Profiles are backend-owned records; the client caches the profile
//! returned at login and otherwise passes user data through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marketplace role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Designer,
}

/// User profile as returned by the backend
///
/// Only the identifier is guaranteed; every other field is optional so a
/// minimal payload round-trips byte-for-byte. Unknown fields are preserved
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl UserProfile {
    /// Minimal profile carrying only an identifier
    #[must_use]
    pub fn with_id(id: i64) -> Self {
        Self { id, name: None, email: None, role: None, extra: serde_json::Map::new() }
    }
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
