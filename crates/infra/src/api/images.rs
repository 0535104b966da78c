//! Request images facade

use std::sync::Arc;

use reqwest::multipart::Form;
use serde_json::Value;
use styleverse_domain::RequestImage;

use super::body::RequestBody;
use super::client::ApiClient;
use super::errors::ApiError;
use super::query::Filters;
use super::Envelope;

/// Facade for the `/customization-request-images` endpoints
pub struct ImagesApi {
    client: Arc<ApiClient>,
}

impl ImagesApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List images matching the given filters
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn list(&self, filters: &Filters) -> Result<Vec<RequestImage>, ApiError> {
        let envelope: Envelope<Vec<RequestImage>> =
            self.client.get_with("/customization-request-images", filters).await?;
        Ok(envelope.data)
    }

    /// Attach image metadata to a request
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn add(&self, image: &Value) -> Result<RequestImage, ApiError> {
        let body = RequestBody::json(image)?;
        let envelope: Envelope<RequestImage> =
            self.client.post("/customization-request-images", body).await?;
        Ok(envelope.data)
    }

    /// Upload image files as a multipart form
    ///
    /// The form travels without the JSON content-type default so the
    /// transport can set the multipart boundary; the bearer token is still
    /// attached when a session exists.
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn upload(&self, form: Form) -> Result<Value, ApiError> {
        let envelope: Envelope<Value> = self
            .client
            .post("/customization-request-images/upload", RequestBody::multipart(form))
            .await?;
        Ok(envelope.data)
    }

    /// Delete an image
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: Value = self.client.delete(&format!("/customization-request-images/{id}")).await?;
        Ok(())
    }
}
