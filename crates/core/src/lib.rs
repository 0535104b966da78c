//! # StyleVerse Core
//!
//! UI-facing business logic of the StyleVerse client, kept behind port
//! traits so it stays independent of the HTTP transport and of whatever
//! widget toolkit embeds it.
//!
//! ## Architecture
//! - Defines ports implemented by `styleverse-infra` (gateways) and by the
//!   embedding application (navigation, notifications)
//! - No I/O of its own

pub mod auth_flow;

pub use auth_flow::controller::AuthFlowController;
pub use auth_flow::ports::{AuthError, AuthGateway, Navigator, Notifier, Route};
