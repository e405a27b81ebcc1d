//! Credential exchange and registration
//!
//! Turns a login submission into a populated session, and a registration
//! submission into a new backend identity. Registration performs the only
//! client-side validation in the crate (password confirmation and minimum
//! length); login forwards whatever it is given and treats every failure
//! uniformly as "invalid credentials or unreachable backend".

mod errors;
mod flow;
mod types;

pub use errors::AuthError;
pub use flow::{AuthFlow, MIN_PASSWORD_LEN};
pub use types::{AuthenticatedUser, LoginCredentials, NewUser, RegisteredUser, RegistrationForm};
