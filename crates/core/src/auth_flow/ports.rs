//! Port interfaces for the authentication flow
//!
//! These traits define the boundaries between the flow logic and its
//! collaborators: the backend gateway (implemented in infra) and the UI
//! side effects (implemented by the embedding application).

use async_trait::async_trait;
use styleverse_domain::constants::{AUTH_ROUTE, HOME_ROUTE};
use styleverse_domain::{Credentials, Registration, UserProfile};
use thiserror::Error;

/// Client-side destinations the flow can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The authentication page
    Auth,
    /// The landing page
    Home,
}

impl Route {
    /// Path of the route as the embedding router knows it
    #[must_use]
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Auth => AUTH_ROUTE,
            Self::Home => HOME_ROUTE,
        }
    }
}

/// Trait for client-side navigation
///
/// Also signaled by the HTTP layer when a session expires, so navigation
/// to the auth page on a 401 is observable without a browser.
pub trait Navigator: Send + Sync {
    /// Move the user interface to the given route
    fn navigate(&self, route: Route);
}

/// Trait for user-visible notifications
pub trait Notifier: Send + Sync {
    /// Show a success message
    fn success(&self, message: &str);

    /// Show a failure message
    fn error(&self, message: &str);
}

/// Error surfaced by the auth gateway
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the operation and supplied a message
    #[error("{0}")]
    Remote(String),

    /// Transport or decoding failure with no user-facing message
    #[error("auth request failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// Backend-supplied message, when one exists
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Remote(message) => Some(message),
            Self::Transport(_) => None,
        }
    }
}

/// Trait for the backend authentication capability
///
/// Implementations establish the client session as part of a successful
/// call; the controller only consumes the returned profile.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Sign in with email and password
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError>;

    /// Create an account
    async fn register(&self, registration: &Registration) -> Result<UserProfile, AuthError>;
}
