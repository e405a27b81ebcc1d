//! Per-view authorization gating
//!
//! Every protected view runs the same check before rendering: an empty
//! credential token means "please log in" plus a redirect to the login view.
//! The guard is advisory, UI-side only; real authorization is enforced by
//! the backend on every request.

use tokio::sync::watch;

use crate::notify::{Severity, SharedNotifier};
use crate::session::{Session, SessionStore};

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view
    Allow,
    /// Do not render; send the visitor to the login view
    RedirectToLogin,
}

/// Session gate applied at view-mount time and on every token change
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionStore,
    notifier: SharedNotifier,
}

impl RouteGuard {
    pub fn new(session: SessionStore, notifier: SharedNotifier) -> Self {
        Self { session, notifier }
    }

    /// Run the check once
    ///
    /// An unauthenticated session fires a "please log in" notification and
    /// redirects; an authenticated one renders normally. Never fails.
    pub fn check(&self) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Allow
        } else {
            self.notifier.notify(Severity::Info, "You need to be logged in");
            GuardDecision::RedirectToLogin
        }
    }

    /// Observe session changes so the check can be re-run reactively
    ///
    /// A view holds this receiver and calls [`RouteGuard::check`] again
    /// whenever it reports a change; that is how an authorization-failure
    /// reset turns into a redirect on the next render cycle.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }
}
