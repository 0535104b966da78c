//! Customization requests facade
//!
//! Creation accepts either request-building strategy: plain JSON, or a
//! multipart form when image attachments ride along with the metadata.

use std::sync::Arc;

use serde_json::Value;
use styleverse_domain::CustomizationRequest;

use super::body::RequestBody;
use super::client::ApiClient;
use super::errors::ApiError;
use super::query::Filters;
use super::Envelope;

/// Facade for the `/customization-requests` endpoints
pub struct RequestsApi {
    client: Arc<ApiClient>,
}

impl RequestsApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List customization requests matching the given filters
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn list(&self, filters: &Filters) -> Result<Vec<CustomizationRequest>, ApiError> {
        let envelope: Envelope<Vec<CustomizationRequest>> =
            self.client.get_with("/customization-requests", filters).await?;
        Ok(envelope.data)
    }

    /// Fetch a single customization request
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn get(&self, id: i64) -> Result<CustomizationRequest, ApiError> {
        let envelope: Envelope<CustomizationRequest> =
            self.client.get(&format!("/customization-requests/{id}")).await?;
        Ok(envelope.data)
    }

    /// Create a customization request
    ///
    /// The caller chooses the payload strategy: [`RequestBody::Json`] for
    /// metadata only, [`RequestBody::Multipart`] when attachments are
    /// uploaded in the same call.
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn create(&self, body: RequestBody) -> Result<CustomizationRequest, ApiError> {
        let envelope: Envelope<CustomizationRequest> =
            self.client.post("/customization-requests", body).await?;
        Ok(envelope.data)
    }

    /// Update a customization request; `changes` is forwarded as-is
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn update(&self, id: i64, changes: &Value) -> Result<CustomizationRequest, ApiError> {
        let body = RequestBody::json(changes)?;
        let envelope: Envelope<CustomizationRequest> =
            self.client.put(&format!("/customization-requests/{id}"), body).await?;
        Ok(envelope.data)
    }

    /// Delete a customization request
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: Value = self.client.delete(&format!("/customization-requests/{id}")).await?;
        Ok(())
    }
}
