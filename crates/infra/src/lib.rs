//! # StyleVerse Infrastructure
//!
//! Infrastructure implementations behind the core ports.
//!
//! This crate contains:
//! - The HTTP transport wrapper
//! - The API client core (request/response pipeline) and the domain
//!   service facades (auth, users, requests, images, proposals, chat)
//! - Keyring-backed session persistence
//! - The configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `styleverse-core` and
//!   `styleverse-common`
//! - Contains all "impure" code (network, credential storage, env/files)

pub mod api;
pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientBuilder, ApiClientConfig, ApiError, AuthApi, ChatApi, Filters,
    FilterValue, ImagesApi, ProposalsApi, RequestBody, RequestsApi, UsersApi,
};
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::KeyringSessionStore;
