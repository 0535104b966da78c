//! Domain data types

pub mod chat;
pub mod marketplace;
pub mod user;

pub use chat::ChatMessage;
pub use marketplace::{CustomizationRequest, DesignerProposal, RequestImage};
pub use user::{Credentials, Registration, Role, UserProfile};
