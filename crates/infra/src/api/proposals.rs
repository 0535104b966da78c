//! Designer proposals facade

use std::sync::Arc;

use serde_json::Value;
use styleverse_domain::DesignerProposal;

use super::body::RequestBody;
use super::client::ApiClient;
use super::errors::ApiError;
use super::query::Filters;
use super::Envelope;

/// Facade for the `/designer-proposals` endpoints
pub struct ProposalsApi {
    client: Arc<ApiClient>,
}

impl ProposalsApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List proposals matching the given filters
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn list(&self, filters: &Filters) -> Result<Vec<DesignerProposal>, ApiError> {
        let envelope: Envelope<Vec<DesignerProposal>> =
            self.client.get_with("/designer-proposals", filters).await?;
        Ok(envelope.data)
    }

    /// Fetch a single proposal
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn get(&self, id: i64) -> Result<DesignerProposal, ApiError> {
        let envelope: Envelope<DesignerProposal> =
            self.client.get(&format!("/designer-proposals/{id}")).await?;
        Ok(envelope.data)
    }

    /// Submit a proposal; the payload is forwarded as-is
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn create(&self, proposal: &Value) -> Result<DesignerProposal, ApiError> {
        let body = RequestBody::json(proposal)?;
        let envelope: Envelope<DesignerProposal> =
            self.client.post("/designer-proposals", body).await?;
        Ok(envelope.data)
    }

    /// Update a proposal
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn update(&self, id: i64, changes: &Value) -> Result<DesignerProposal, ApiError> {
        let body = RequestBody::json(changes)?;
        let envelope: Envelope<DesignerProposal> =
            self.client.put(&format!("/designer-proposals/{id}"), body).await?;
        Ok(envelope.data)
    }
}
