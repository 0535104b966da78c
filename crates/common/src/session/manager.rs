//! Session manager
//!
//! Owns the session lifecycle:
//! - Load the persisted session at app start
//! - Establish a new session after login/registration
//! - Serve token reads for the request pipeline (infallible)
//! - Clear everything on logout or authorization failure

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use styleverse_domain::UserProfile;

use super::store::{SessionStore, SessionStoreError};
use super::types::Session;

/// Lifecycle owner for the client session
///
/// Holds the current session in memory over a persistent [`SessionStore`].
/// Exactly one manager should exist per client; it is injected into the
/// HTTP layer rather than reached through ambient storage access.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Create a manager over the given store
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store, current: RwLock::new(None) }
    }

    /// Load any persisted session into memory
    ///
    /// Should be called once at app start. Absence of a session is not an
    /// error, and a failing store is treated as absence so startup never
    /// blocks on storage trouble.
    ///
    /// # Returns
    /// `true` if a session was loaded, `false` otherwise
    pub async fn initialize(&self) -> bool {
        match self.store.load().await {
            Ok(Some(session)) => {
                *self.current.write().await = Some(session);
                info!("session manager initialized with existing session");
                true
            }
            Ok(None) => {
                debug!("no persisted session found");
                false
            }
            Err(err) => {
                warn!(error = %err, "failed to load persisted session, starting signed out");
                false
            }
        }
    }

    /// Persist and cache a freshly issued session
    ///
    /// # Errors
    /// Returns error if the store rejects the write; the in-memory session
    /// is still replaced so the client keeps working for the current run.
    pub async fn establish(&self, session: Session) -> Result<(), SessionStoreError> {
        let persisted = self.store.save(&session).await;
        *self.current.write().await = Some(session);

        match persisted {
            Ok(()) => {
                info!("session established");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "session established in memory only");
                Err(err)
            }
        }
    }

    /// Current bearer token, if authenticated
    ///
    /// This is the read the request pipeline performs on every outgoing
    /// call; it cannot fail. Storage trouble surfaces earlier (at
    /// [`SessionManager::initialize`]) as an absent session.
    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|session| session.token.clone())
    }

    /// Cached profile of the signed-in user
    pub async fn profile(&self) -> Option<UserProfile> {
        self.current.read().await.as_ref().map(|session| session.user.clone())
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Whether a session is active (presence of the token is the signal)
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Destroy the session (logout or expiry)
    ///
    /// The in-memory session is dropped first so the client is signed out
    /// even when the store fails to delete its entries.
    ///
    /// # Errors
    /// Returns error if the store rejects the deletion
    pub async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.current.write().await = None;
        self.store.clear().await?;
        info!("session cleared");
        Ok(())
    }
}
