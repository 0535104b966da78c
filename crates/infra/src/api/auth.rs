//! Authentication facade
//!
//! Wraps the `/auth` endpoints and owns session establishment: a
//! successful login or registration persists the issued token and profile
//! through the client's session manager before the profile is returned.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

use styleverse_common::Session;
use styleverse_core::{AuthError, AuthGateway};
use styleverse_domain::{Credentials, Registration, UserProfile};

use super::body::RequestBody;
use super::client::ApiClient;
use super::errors::ApiError;
use super::Envelope;

/// Session payload issued by the auth endpoints
///
/// Login responses have been observed naming the profile `userData` while
/// registration responses name it `user`. The alias accepts both shapes;
/// the canonical field name is `user`. Which one the backend considers
/// authoritative is still an open question on the API contract.
#[derive(Debug, Deserialize)]
struct SessionPayload {
    token: String,
    #[serde(alias = "userData")]
    user: UserProfile,
}

/// Facade for the backend authentication capability
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Create a new auth facade over the shared client
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Sign in with email and password
    ///
    /// Establishes the client session on success and returns the profile.
    ///
    /// # Errors
    /// Returns error if the call fails or the session cannot be persisted
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let body = RequestBody::json(credentials)?;
        let envelope: Envelope<SessionPayload> = self.client.post("/auth/login", body).await?;

        let user = self.establish(envelope.data).await?;
        info!("login successful");
        Ok(user)
    }

    /// Create an account
    ///
    /// The backend issues a session immediately; it is established exactly
    /// like a login session.
    ///
    /// # Errors
    /// Returns error if the call fails or the session cannot be persisted
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        let body = RequestBody::json(registration)?;
        let envelope: Envelope<SessionPayload> =
            self.client.post("/auth/register", body).await?;

        let user = self.establish(envelope.data).await?;
        info!("registration successful");
        Ok(user)
    }

    /// Fetch the profile of the signed-in user
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let envelope: Envelope<UserProfile> = self.client.get("/auth/me").await?;
        Ok(envelope.data)
    }

    /// Sign out
    ///
    /// Client-side only: destroys the session, no backend call is made.
    ///
    /// # Errors
    /// Returns error if the persisted entries cannot be removed
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.session().clear().await.map_err(|err| ApiError::Storage(err.to_string()))
    }

    async fn establish(&self, payload: SessionPayload) -> Result<UserProfile, ApiError> {
        let SessionPayload { token, user } = payload;

        self.client
            .session()
            .establish(Session::new(token, user.clone()))
            .await
            .map_err(|err| ApiError::Storage(err.to_string()))?;

        Ok(user)
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        Self::login(self, credentials).await.map_err(into_auth_error)
    }

    async fn register(&self, registration: &Registration) -> Result<UserProfile, AuthError> {
        Self::register(self, registration).await.map_err(into_auth_error)
    }
}

fn into_auth_error(err: ApiError) -> AuthError {
    match err.server_message() {
        Some(message) => AuthError::Remote(message.to_string()),
        None => AuthError::Transport(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_payload_accepts_both_profile_field_names() {
        let login_shape: SessionPayload =
            serde_json::from_str(r#"{"token":"t1","userData":{"id":1}}"#).unwrap();
        assert_eq!(login_shape.token, "t1");
        assert_eq!(login_shape.user.id, 1);

        let register_shape: SessionPayload =
            serde_json::from_str(r#"{"token":"t2","user":{"id":2}}"#).unwrap();
        assert_eq!(register_shape.token, "t2");
        assert_eq!(register_shape.user.id, 2);
    }

    #[test]
    fn gateway_errors_keep_backend_messages() {
        let err = into_auth_error(ApiError::Auth(super::super::errors::StatusError::new(
            401,
            Some("Wrong password".to_string()),
        )));
        assert_eq!(err.user_message(), Some("Wrong password"));

        let err = into_auth_error(ApiError::Network("connection refused".to_string()));
        assert_eq!(err.user_message(), None);
    }
}
