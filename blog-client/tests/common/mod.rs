//! Shared helpers for the integration tests

use std::sync::{Arc, Mutex};

use blog_client::{Identity, Notify, SessionStore, Severity};

/// Notification sink that records everything it is handed
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<(Severity, String)> {
        self.messages.lock().expect("notifier lock").clone()
    }

    pub fn last_severity(&self) -> Option<Severity> {
        self.recorded().last().map(|(severity, _)| *severity)
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock")
            .push((severity, message.to_string()));
    }
}

/// Session store pre-populated with an authenticated user
pub fn authenticated_store(token: &str) -> SessionStore {
    let store = SessionStore::new();
    store.set(
        Identity {
            id: 1,
            name: "Alice".to_string(),
            login: "alice".to_string(),
            photo: String::new(),
        },
        token.to_string(),
    );
    store
}
