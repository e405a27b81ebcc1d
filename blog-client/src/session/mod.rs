//! In-memory session state shared across the application
//!
//! The [`SessionStore`] is the single source of truth for "who is logged in".
//! It is written by exactly three transitions: set on successful login, clear
//! on explicit logout, clear on an authorization failure. Consumers observe
//! changes through a watch subscription instead of polling.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{Identity, Session};
