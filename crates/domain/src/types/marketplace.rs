//! Marketplace resource types
//!
//! Customization requests, their image attachments, and designer proposals
//! are owned and validated by the backend. The client treats everything
//! beyond the identifier as opaque JSON and forwards it unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer's custom-fashion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationRequest {
    pub id: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// Image attached to a customization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestImage {
    pub id: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// A designer's proposal answering a customization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerProposal {
    pub id: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}
