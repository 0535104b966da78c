//! API client core and domain service facades
//!
//! A single configured [`ApiClient`] carries the cross-cutting pipeline:
//! bearer-token injection on the way out, status classification and
//! session expiry handling on the way back. One facade per backend
//! capability wraps it with typed operations.

mod auth;
mod body;
mod chat;
mod client;
mod errors;
mod images;
mod proposals;
mod query;
mod requests;
mod users;

pub use auth::AuthApi;
pub use body::RequestBody;
pub use chat::ChatApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, StatusError};
pub use images::ImagesApi;
pub use proposals::ProposalsApi;
pub use query::{FilterValue, Filters};
pub use requests::RequestsApi;
pub use users::UsersApi;

use serde::Deserialize;

/// Standard response envelope of the StyleVerse backend
///
/// Every resource endpoint wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}
