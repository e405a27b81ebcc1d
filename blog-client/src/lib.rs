//! blog_client - Session-aware client library for a personal-blog REST backend
//!
//! This crate provides the client-side session and authorization core for a
//! personal-blog API (users, themes, posts): a shared session store with
//! observer semantics, credential exchange and registration, per-view route
//! guarding, and automatic logout when the backend rejects a credential token.

mod auth;
mod config;
mod coordination;
mod gateway;
mod guard;
mod notify;
mod session;

pub use auth::{
    AuthError, AuthFlow, AuthenticatedUser, LoginCredentials, NewUser, RegisteredUser,
    RegistrationForm, MIN_PASSWORD_LEN,
};
pub use config::BLOG_API_BASE_URL;
pub use coordination::{CoordinationError, Post, PostService, Theme, ThemeService};
pub use gateway::{Gateway, GatewayError};
pub use guard::{GuardDecision, RouteGuard};
pub use notify::{Notify, Severity, SharedNotifier, TracingNotifier};
pub use session::{Identity, Session, SessionStore};
