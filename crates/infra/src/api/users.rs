//! Users facade

use std::sync::Arc;

use serde_json::Value;
use styleverse_domain::UserProfile;

use super::client::ApiClient;
use super::errors::ApiError;
use super::query::Filters;
use super::Envelope;

/// Facade for the `/users` endpoints
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List users matching the given filters
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn list(&self, filters: &Filters) -> Result<Vec<UserProfile>, ApiError> {
        let envelope: Envelope<Vec<UserProfile>> =
            self.client.get_with("/users", filters).await?;
        Ok(envelope.data)
    }

    /// Fetch a single user
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn get(&self, id: i64) -> Result<UserProfile, ApiError> {
        let envelope: Envelope<UserProfile> = self.client.get(&format!("/users/{id}")).await?;
        Ok(envelope.data)
    }

    /// Update a user; `changes` is forwarded as-is
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn update(&self, id: i64, changes: &Value) -> Result<UserProfile, ApiError> {
        let body = super::body::RequestBody::json(changes)?;
        let envelope: Envelope<UserProfile> =
            self.client.put(&format!("/users/{id}"), body).await?;
        Ok(envelope.data)
    }

    /// Delete a user
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: Value = self.client.delete(&format!("/users/{id}")).await?;
        Ok(())
    }
}
