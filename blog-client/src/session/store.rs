use std::sync::Arc;

use tokio::sync::watch;

use crate::session::types::{Identity, Session};

/// Shared holder of the current [`Session`]
///
/// Cloning the store yields another handle onto the same session; consumers
/// that need to react to login/logout subscribe for change notifications
/// instead of polling. The store never fails: reads always return a value
/// and writes always succeed, with or without subscribers.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
}

impl SessionStore {
    /// Create a store in the sentinel (unauthenticated) state
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::unauthenticated());
        Self { tx: Arc::new(tx) }
    }

    /// Current session value
    pub fn get(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Current credential token; `""` when unauthenticated
    pub fn token(&self) -> String {
        self.tx.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Total replacement of the session on successful login
    ///
    /// Only the authentication flow calls this.
    pub fn set(&self, identity: Identity, token: String) {
        tracing::debug!("Session set for user id {}", identity.id);
        self.tx.send_replace(Session {
            identity: Some(identity),
            token,
        });
    }

    /// Reset to the sentinel state
    ///
    /// Used by explicit logout as well as by authorization-failure recovery.
    /// Idempotent: clearing an already clear session is a no-op.
    pub fn clear(&self) {
        let session = self.tx.borrow().clone();
        if session.is_authenticated() {
            tracing::debug!("Session cleared");
        }
        self.tx.send_replace(Session::unauthenticated());
    }

    /// Subscribe to session changes
    ///
    /// The receiver observes every `set`/`clear` transition; the initial
    /// value is the session at subscription time.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
