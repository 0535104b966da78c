//! Request body strategies
//!
//! The caller picks the strategy explicitly; the transport never inspects
//! the payload at runtime. JSON and empty bodies carry the default JSON
//! content type, multipart bodies leave the content type to the transport
//! so it can set the boundary.

use reqwest::multipart::Form;
use serde::Serialize;

use super::errors::ApiError;

/// Tagged request payload
#[derive(Debug)]
pub enum RequestBody {
    /// No payload (GET/DELETE)
    Empty,
    /// JSON payload, sent with `Content-Type: application/json`
    Json(serde_json::Value),
    /// Multipart form payload; the transport sets the boundary header
    Multipart(Form),
}

impl RequestBody {
    /// Serialize a value into a JSON body
    ///
    /// # Errors
    /// Returns [`ApiError::Decode`] if the value cannot be serialized
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value)
            .map_err(|err| ApiError::Decode(format!("failed to serialize body: {err}")))?;
        Ok(Self::Json(value))
    }

    /// Wrap a multipart form
    #[must_use]
    pub fn multipart(form: Form) -> Self {
        Self::Multipart(form)
    }

    /// Whether this body bypasses the JSON content-type default
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}
