//! Keyring-backed session store
//!
//! Persists the session through the OS credential store (macOS Keychain,
//! Windows Credential Manager, Linux Secret Service) as two entries under
//! a configurable service name: the raw token and the JSON-serialized
//! profile.

use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

use styleverse_common::{Session, SessionStore, SessionStoreError};
use styleverse_domain::constants::{SESSION_TOKEN_ENTRY, SESSION_USER_ENTRY};
use styleverse_domain::UserProfile;

/// Session store backed by the platform keyring
pub struct KeyringSessionStore {
    service: String,
}

impl KeyringSessionStore {
    /// Default keyring service name
    pub const DEFAULT_SERVICE: &'static str = "styleverse.client";

    /// Create a store under the given keyring service name
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, name: &str) -> Result<Entry, SessionStoreError> {
        Entry::new(&self.service, name)
            .map_err(|err| SessionStoreError::Backend(err.to_string()))
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SERVICE)
    }
}

#[async_trait]
impl SessionStore for KeyringSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let token = match self.entry(SESSION_TOKEN_ENTRY)?.get_password() {
            Ok(token) => token,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(err) => return Err(SessionStoreError::Backend(err.to_string())),
        };

        let raw_user = match self.entry(SESSION_USER_ENTRY)?.get_password() {
            Ok(raw) => raw,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(err) => return Err(SessionStoreError::Backend(err.to_string())),
        };

        let user: UserProfile = serde_json::from_str(&raw_user)
            .map_err(|err| SessionStoreError::Corrupt(err.to_string()))?;

        debug!(service = %self.service, "loaded persisted session");
        Ok(Some(Session::new(token, user)))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|err| SessionStoreError::Backend(err.to_string()))?;

        self.entry(SESSION_TOKEN_ENTRY)?
            .set_password(&session.token)
            .map_err(|err| SessionStoreError::Backend(err.to_string()))?;
        self.entry(SESSION_USER_ENTRY)?
            .set_password(&user)
            .map_err(|err| SessionStoreError::Backend(err.to_string()))?;

        debug!(service = %self.service, "persisted session entries");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        for name in [SESSION_TOKEN_ENTRY, SESSION_USER_ENTRY] {
            match self.entry(name)?.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(err) => return Err(SessionStoreError::Backend(err.to_string())),
            }
        }

        debug!(service = %self.service, "removed session entries");
        Ok(())
    }
}
