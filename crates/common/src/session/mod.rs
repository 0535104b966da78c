//! Session lifecycle management
//!
//! A session is the client-held proof of authentication: a bearer token
//! plus the cached profile returned at login. It is persisted as exactly
//! two storage entries (`token` and `user`) and at most one session is
//! active at a time.
//!
//! The subsystem is split the usual way:
//! - [`Session`] - the value itself
//! - [`SessionStore`] - persistence boundary (keyring in production,
//!   in-memory for tests and embedders without an OS credential store)
//! - [`SessionManager`] - lifecycle owner injected into the HTTP layer

mod manager;
mod store;
mod types;

pub use manager::SessionManager;
pub use store::{MemorySessionStore, SessionStore, SessionStoreError};
pub use types::Session;
