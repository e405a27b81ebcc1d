//! Protected resource operations and authorization-failure recovery
//!
//! CRUD over the theme and post resources, with every call drawing the
//! credential token from the session store at dispatch time and funnelling
//! failures through a single recovery handler: an authorization-class error
//! clears the session (the route guard redirects on its next re-check);
//! anything else surfaces as a failure notification and leaves the session
//! alone.

mod errors;
mod post;
mod recovery;
mod theme;

pub use errors::CoordinationError;
pub use post::{Post, PostService};
pub use theme::{Theme, ThemeService};
