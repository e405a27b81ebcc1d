//! User-facing notification channel
//!
//! The library decides WHEN to notify the user and with WHAT severity; how a
//! notification is rendered (toast, alert, log line) is up to the embedding
//! application, which supplies the [`Notify`] implementation.

use std::sync::Arc;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Sink for transient user-facing notifications
pub trait Notify {
    fn notify(&self, severity: Severity, message: &str);
}

/// Shared notification sink handle passed to every flow that reports to the user
pub type SharedNotifier = Arc<dyn Notify + Send + Sync>;

/// Default sink that renders notifications through `tracing`
///
/// Useful for headless consumers and the demo binary; interactive
/// applications will normally provide their own sink.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notify for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Success => tracing::info!("success: {}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}
