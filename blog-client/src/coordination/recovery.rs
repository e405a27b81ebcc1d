use crate::coordination::errors::CoordinationError;
use crate::gateway::GatewayError;
use crate::notify::{Severity, SharedNotifier};
use crate::session::SessionStore;

/// Funnel for every protected call's failure path
///
/// 401 and 403 both mean the token is no longer honored: the session is
/// reset and the caller gets `SessionExpired` (the redirect itself is the
/// route guard's job, on its next reactive re-check). All other error
/// classes fire the supplied failure notification and leave the session
/// untouched.
pub(super) fn recover(
    session: &SessionStore,
    notifier: &SharedNotifier,
    err: GatewayError,
    failure_message: &str,
) -> CoordinationError {
    if err.is_authorization_failure() {
        tracing::info!("Credential token rejected ({}), clearing session", err);
        session.clear();
        CoordinationError::SessionExpired
    } else {
        notifier.notify(Severity::Error, failure_message);
        CoordinationError::from(err)
    }
}
