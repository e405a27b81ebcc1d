//! Thin HTTP transport over the blog backend
//!
//! All backend traffic goes through [`Gateway`]: relative endpoint paths are
//! resolved against a configured base address and the credential token, when
//! one is supplied, travels verbatim as the `Authorization` header value.

mod client;
mod errors;

pub use client::Gateway;
pub use errors::GatewayError;
