//! Shared client infrastructure for StyleVerse crates.
//!
//! Currently this crate hosts the session subsystem: the in-memory session
//! context, the persistence trait backing it, and the manager that owns the
//! session lifecycle (established on login, read on every request, cleared
//! on logout or expiry).

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod session;

// Re-export commonly used types and traits for convenience
pub use session::{
    MemorySessionStore, Session, SessionManager, SessionStore, SessionStoreError,
};
