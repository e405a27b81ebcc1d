/// Login and registration flow tests
///
/// Each test stands up a mock backend, drives the authentication flow
/// through the public API and checks the resulting session state and
/// notifications.
use httpmock::prelude::*;
use serde_json::json;

use blog_client::{
    AuthError, AuthFlow, Gateway, GatewayError, LoginCredentials, NewUser, RegistrationForm,
    SessionStore, Severity,
};

use crate::common::RecordingNotifier;

fn alice_credentials() -> LoginCredentials {
    LoginCredentials {
        login: "alice".to_string(),
        password: "validpass1".to_string(),
    }
}

#[tokio::test]
async fn test_successful_login_populates_session() {
    let server = MockServer::start_async().await;
    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/usuarios/logar");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": 1,
                    "nome": "Alice",
                    "usuario": "alice",
                    "foto": "",
                    "token": "abc123"
                }));
        })
        .await;

    let session = SessionStore::new();
    let notifier = RecordingNotifier::new();
    let flow = AuthFlow::new(
        Gateway::new(&server.base_url()).expect("valid base address"),
        session.clone(),
        notifier.clone(),
    );

    let result = flow.login(alice_credentials()).await;

    assert!(result.is_ok(), "Login should succeed: {result:?}");
    login_mock.assert_async().await;

    let current = session.get();
    assert_eq!(current.token, "abc123");
    assert_eq!(current.identity.as_ref().map(|i| i.id), Some(1));
    assert_eq!(
        current.identity.as_ref().map(|i| i.name.as_str()),
        Some("Alice")
    );
    assert_eq!(notifier.last_severity(), Some(Severity::Success));
    assert!(!flow.is_loading(), "Loading flag must settle back to false");
}

#[tokio::test]
async fn test_failed_login_leaves_session_at_sentinel() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/usuarios/logar");
            then.status(400);
        })
        .await;

    let session = SessionStore::new();
    let notifier = RecordingNotifier::new();
    let flow = AuthFlow::new(
        Gateway::new(&server.base_url()).expect("valid base address"),
        session.clone(),
        notifier.clone(),
    );

    let result = flow.login(alice_credentials()).await;

    match result {
        Err(AuthError::Gateway(GatewayError::ClientError(status))) => {
            assert_eq!(status.as_u16(), 400);
        }
        other => panic!("Expected a client error, got {other:?}"),
    }
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), "");
    assert_eq!(notifier.last_severity(), Some(Severity::Error));
}

#[tokio::test]
async fn test_unreachable_backend_fails_login_uniformly() {
    // Nothing listens here; the flow must report failure the same way it
    // reports bad credentials
    let session = SessionStore::new();
    let notifier = RecordingNotifier::new();
    let flow = AuthFlow::new(
        Gateway::new("http://127.0.0.1:9").expect("valid base address"),
        session.clone(),
        notifier.clone(),
    );

    let result = flow.login(alice_credentials()).await;

    match result {
        Err(AuthError::Gateway(GatewayError::Network(_))) => {}
        other => panic!("Expected a network error, got {other:?}"),
    }
    assert!(!session.is_authenticated());
    assert_eq!(notifier.last_severity(), Some(Severity::Error));
}

#[tokio::test]
async fn test_short_password_registration_never_hits_the_network() {
    let server = MockServer::start_async().await;
    let register_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/usuarios/cadastrar");
            then.status(201);
        })
        .await;

    let notifier = RecordingNotifier::new();
    let flow = AuthFlow::new(
        Gateway::new(&server.base_url()).expect("valid base address"),
        SessionStore::new(),
        notifier.clone(),
    );

    let mut form = RegistrationForm {
        user: NewUser {
            id: 0,
            name: "Bob".to_string(),
            login: "bob@example.com".to_string(),
            password: "short".to_string(),
            photo: String::new(),
        },
        confirm_password: "short".to_string(),
    };

    let result = flow.register(&mut form).await;

    match result {
        Err(AuthError::Validation(_)) => {}
        other => panic!("Expected a validation error, got {other:?}"),
    }
    assert_eq!(
        register_mock.hits_async().await,
        0,
        "A rejected form must never produce a request"
    );
    assert_eq!(form.user.password, "");
    assert_eq!(form.confirm_password, "");

    let recorded = notifier.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, Severity::Error);
}

#[tokio::test]
async fn test_successful_registration_does_not_log_in() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/usuarios/cadastrar");
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": 5,
                    "nome": "Bob",
                    "usuario": "bob@example.com",
                    "foto": ""
                }));
        })
        .await;

    let session = SessionStore::new();
    let notifier = RecordingNotifier::new();
    let flow = AuthFlow::new(
        Gateway::new(&server.base_url()).expect("valid base address"),
        session.clone(),
        notifier.clone(),
    );

    let mut form = RegistrationForm {
        user: NewUser {
            id: 0,
            name: "Bob".to_string(),
            login: "bob@example.com".to_string(),
            password: "longenough".to_string(),
            photo: String::new(),
        },
        confirm_password: "longenough".to_string(),
    };

    let registered = flow
        .register(&mut form)
        .await
        .expect("Registration should succeed");

    // The database-assigned id is the completion signal
    assert_eq!(registered.id, 5);
    assert!(
        !session.is_authenticated(),
        "Registration must not populate the session"
    );
    assert_eq!(notifier.last_severity(), Some(Severity::Success));
}

#[tokio::test]
async fn test_logout_resets_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/usuarios/logar");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": 1,
                    "nome": "Alice",
                    "usuario": "alice",
                    "foto": "",
                    "token": "abc123"
                }));
        })
        .await;

    let session = SessionStore::new();
    let flow = AuthFlow::new(
        Gateway::new(&server.base_url()).expect("valid base address"),
        session.clone(),
        RecordingNotifier::new(),
    );

    flow.login(alice_credentials()).await.expect("login");
    assert!(session.is_authenticated());

    flow.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), "");

    // Re-entrant: a fresh login works after logout
    flow.login(alice_credentials()).await.expect("re-login");
    assert!(session.is_authenticated());
}
