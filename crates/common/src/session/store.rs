//! Session persistence boundary
//!
//! A store persists a session as two entries, named by
//! [`styleverse_domain::constants::SESSION_TOKEN_ENTRY`] and
//! [`styleverse_domain::constants::SESSION_USER_ENTRY`]: the raw token
//! string and the JSON-serialized profile. Implementations must treat the
//! pair atomically enough that `load` only reports a session when the
//! token entry exists.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use styleverse_domain::constants::{SESSION_TOKEN_ENTRY, SESSION_USER_ENTRY};
use styleverse_domain::UserProfile;
use thiserror::Error;

use super::types::Session;

/// Error type for session store operations
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The storage backend rejected the operation
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A persisted entry exists but cannot be decoded
    #[error("persisted session entry is corrupt: {0}")]
    Corrupt(String),
}

/// Trait for persisting the client session
///
/// Abstracts the storage backend so the session manager can be exercised
/// with an in-memory store in tests and backed by the OS credential store
/// in production.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, if any
    ///
    /// Absence of a session is not an error. A missing token entry means
    /// no session, regardless of what else is stored.
    async fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Persist the session (both entries)
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove both persisted entries (idempotent)
    async fn clear(&self) -> Result<(), SessionStoreError>;
}

/// In-memory session store
///
/// Mirrors the two-entry layout of the persistent stores so tests can
/// inspect exactly what would be written.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw view of the stored entries, for test assertions
    #[must_use]
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Whether any entry is currently stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().map(|guard| guard.is_empty()).unwrap_or(true)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SessionStoreError::Backend("session store mutex poisoned".into()))?;

        let Some(token) = entries.get(SESSION_TOKEN_ENTRY) else {
            return Ok(None);
        };
        let Some(raw_user) = entries.get(SESSION_USER_ENTRY) else {
            return Ok(None);
        };

        let user: UserProfile = serde_json::from_str(raw_user)
            .map_err(|err| SessionStoreError::Corrupt(err.to_string()))?;

        Ok(Some(Session::new(token.clone(), user)))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|err| SessionStoreError::Backend(err.to_string()))?;

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SessionStoreError::Backend("session store mutex poisoned".into()))?;
        entries.insert(SESSION_TOKEN_ENTRY.to_string(), session.token.clone());
        entries.insert(SESSION_USER_ENTRY.to_string(), user);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SessionStoreError::Backend("session store mutex poisoned".into()))?;
        entries.remove(SESSION_TOKEN_ENTRY);
        entries.remove(SESSION_USER_ENTRY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use styleverse_domain::UserProfile;

    use super::*;

    #[tokio::test]
    async fn save_writes_exactly_two_entries() {
        let store = MemorySessionStore::new();
        store.save(&Session::new("t1", UserProfile::with_id(1))).await.unwrap();

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("token").map(String::as_str), Some("t1"));
        assert_eq!(entries.get("user").map(String::as_str), Some(r#"{"id":1}"#));
    }

    #[tokio::test]
    async fn load_requires_the_token_entry() {
        let store = MemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&Session::new("t1", UserProfile::with_id(1))).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "t1");
        assert_eq!(loaded.user.id, 1);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.save(&Session::new("t1", UserProfile::with_id(1))).await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.is_empty());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_user_entry_is_reported() {
        let store = MemorySessionStore::new();
        {
            let mut entries = store.entries.lock().unwrap();
            entries.insert("token".to_string(), "t1".to_string());
            entries.insert("user".to_string(), "{not json".to_string());
        }

        let result = store.load().await;
        assert!(matches!(result, Err(SessionStoreError::Corrupt(_))));
    }
}
