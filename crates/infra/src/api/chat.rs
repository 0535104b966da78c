//! Chat facade

use std::sync::Arc;

use serde_json::Value;
use styleverse_domain::ChatMessage;

use super::body::RequestBody;
use super::client::ApiClient;
use super::errors::ApiError;
use super::query::Filters;
use super::Envelope;

/// Facade for the `/chat` endpoints
pub struct ChatApi {
    client: Arc<ApiClient>,
}

impl ChatApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the conversation between two users
    ///
    /// Identifiers travel as `senderId`/`receiverId` query parameters.
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn history(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let filters =
            Filters::new().set("senderId", sender_id).set("receiverId", receiver_id);
        let envelope: Envelope<Vec<ChatMessage>> =
            self.client.get_with("/chat", &filters).await?;
        Ok(envelope.data)
    }

    /// Send a message; the payload is forwarded as-is
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn send(&self, message: &Value) -> Result<ChatMessage, ApiError> {
        let body = RequestBody::json(message)?;
        let envelope: Envelope<ChatMessage> = self.client.post("/chat", body).await?;
        Ok(envelope.data)
    }
}
