use std::sync::Arc;

use tokio::sync::watch;

use crate::auth::errors::AuthError;
use crate::auth::types::{AuthenticatedUser, LoginCredentials, RegisteredUser, RegistrationForm};
use crate::gateway::Gateway;
use crate::notify::{Severity, SharedNotifier};
use crate::session::SessionStore;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Login, logout and registration against the backend
///
/// The flow owns an in-progress flag so callers can disable resubmission
/// while a request is outstanding; it does not reject concurrent calls, and
/// a login response that arrives after an intervening logout will still be
/// applied (the in-flight race the backend contract accepts).
#[derive(Clone)]
pub struct AuthFlow {
    gateway: Gateway,
    session: SessionStore,
    notifier: SharedNotifier,
    loading: Arc<watch::Sender<bool>>,
}

impl AuthFlow {
    pub fn new(gateway: Gateway, session: SessionStore, notifier: SharedNotifier) -> Self {
        let (loading, _rx) = watch::channel(false);
        Self {
            gateway,
            session,
            notifier,
            loading: Arc::new(loading),
        }
    }

    /// Exchange credentials for a populated session
    ///
    /// Success replaces the whole session and fires a success notification.
    /// Every failure is treated the same at this layer: the session is left
    /// untouched and an error notification fires, with no status-code
    /// distinction between bad credentials and an unreachable backend.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<(), AuthError> {
        self.loading.send_replace(true);

        let result = self
            .gateway
            .post::<_, AuthenticatedUser>("/usuarios/logar", &credentials, None)
            .await;

        let outcome = match result {
            Ok(user) => {
                let (identity, token) = user.into_session_parts();
                self.session.set(identity, token);
                self.notifier
                    .notify(Severity::Success, "User authenticated successfully");
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Login failed: {}", e);
                self.notifier
                    .notify(Severity::Error, "Invalid credentials or unreachable backend");
                Err(e.into())
            }
        };

        self.loading.send_replace(false);
        outcome
    }

    /// Reset the session to the sentinel state
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Register a new identity; does NOT populate the session
    ///
    /// Validation failures never reach the network: both password fields in
    /// the form are cleared and an error notification fires. On success the
    /// backend echoes the record with its database-assigned id, which is the
    /// completion signal.
    pub async fn register(
        &self,
        form: &mut RegistrationForm,
    ) -> Result<RegisteredUser, AuthError> {
        if let Some(reason) = validation_error(form) {
            form.clear_passwords();
            self.notifier.notify(Severity::Error, reason);
            return Err(AuthError::Validation(reason.to_string()));
        }

        self.loading.send_replace(true);

        let result = self
            .gateway
            .post::<_, RegisteredUser>("/usuarios/cadastrar", &form.user, None)
            .await;

        let outcome = match result {
            Ok(registered) => {
                self.notifier
                    .notify(Severity::Success, "User registered successfully");
                Ok(registered)
            }
            Err(e) => {
                tracing::debug!("Registration failed: {}", e);
                self.notifier.notify(Severity::Error, "Failed to register user");
                Err(e.into())
            }
        };

        self.loading.send_replace(false);
        outcome
    }

    /// Whether a request is currently outstanding
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Observe the in-progress flag, e.g. to drive a spinner
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}

fn validation_error(form: &RegistrationForm) -> Option<&'static str> {
    if form.user.password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters long");
    }
    if form.user.password != form.confirm_password {
        return Some("Password and confirmation do not match");
    }
    None
}
