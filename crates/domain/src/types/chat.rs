//! Chat message types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A chat message between a customer and a designer
///
/// Wire names are camelCase to match the backend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sender_id: i64,
    pub receiver_id: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}
