//! Session persistence backends

mod keyring_store;

pub use keyring_store::KeyringSessionStore;
