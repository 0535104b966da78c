//! Session value type

use serde::{Deserialize, Serialize};
use styleverse_domain::UserProfile;

/// The client-held proof of authentication
///
/// Created on successful login or registration, read on every outgoing
/// request, destroyed on explicit logout or on an authorization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential issued by the backend
    pub token: String,
    /// Profile returned alongside the token
    pub user: UserProfile,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self { token: token.into(), user }
    }
}
