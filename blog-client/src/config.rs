//! Central configuration for the blog_client crate

use std::sync::LazyLock;

/// Base address of the blog backend
///
/// Every relative endpoint path (`/usuarios/logar`, `/temas`, `/postagens`, ...)
/// is resolved against this origin.
/// Default: "http://localhost:8080"
pub static BLOG_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BLOG_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
});
