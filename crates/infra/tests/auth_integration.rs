//! Integration coverage for the auth facade and the auth page flow:
//! session establishment on login/registration, logout, and the
//! controller's notification/navigation side effects.

mod support;

use std::sync::Arc;

use serde_json::json;
use styleverse_core::{AuthFlowController, Route};
use styleverse_domain::{Credentials, Registration, Role};
use styleverse_infra::AuthApi;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{harness, signed_in_harness, RecordingNotifier};

#[tokio::test]
async fn login_stores_token_and_user_and_returns_the_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({"email": "a@b.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"token": "t1", "userData": {"id": 1}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let auth = AuthApi::new(h.client.clone());

    let user = auth.login(&Credentials::new("a@b.com", "pw")).await.expect("login succeeds");

    assert_eq!(user.id, 1);
    assert!(h.session.is_authenticated().await);

    let entries = h.store.entries();
    assert_eq!(entries.get("token").map(String::as_str), Some("t1"));
    assert_eq!(entries.get("user").map(String::as_str), Some(r#"{"id":1}"#));
}

#[tokio::test]
async fn register_parses_the_user_field_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_partial_json(json!({"role": "designer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": {"token": "t2", "user": {"id": 2, "name": "Ada"}}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let auth = AuthApi::new(h.client.clone());

    let registration = Registration {
        name: "Ada".to_string(),
        email: "ada@styleverse.io".to_string(),
        password: "pw".to_string(),
        role: Role::Designer,
    };
    let user = auth.register(&registration).await.expect("registration succeeds");

    assert_eq!(user.id, 2);
    assert_eq!(h.store.entries().get("token").map(String::as_str), Some("t2"));
}

#[tokio::test]
async fn me_returns_the_current_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})))
        .mount(&server)
        .await;

    let h = signed_in_harness(&server).await;
    let auth = AuthApi::new(h.client.clone());

    let user = auth.me().await.expect("me succeeds");
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn logout_clears_the_persisted_session() {
    let server = MockServer::start().await;

    let h = signed_in_harness(&server).await;
    let auth = AuthApi::new(h.client.clone());

    auth.logout().await.expect("logout succeeds");

    assert!(h.store.is_empty());
    assert!(!h.session.is_authenticated().await);
}

#[tokio::test]
async fn rejected_login_surfaces_the_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let auth = AuthApi::new(h.client.clone());

    let err = auth.login(&Credentials::new("a@b.com", "nope")).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Wrong password"));
    // The 401 pipeline fires for the login call like for any other.
    assert_eq!(h.navigator.last(), Some(Route::Auth));
}

fn controller_over(
    h: &support::TestHarness,
) -> (AuthFlowController, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let gateway = Arc::new(AuthApi::new(h.client.clone()));
    let controller = AuthFlowController::new(gateway, h.navigator.clone(), notifier.clone());
    (controller, notifier)
}

#[tokio::test]
async fn controller_login_flow_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"token": "t1", "userData": {"id": 1}}})),
        )
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let (controller, notifier) = controller_over(&h);

    controller.login(Credentials::new("a@b.com", "pw")).await;

    assert_eq!(controller.current_user().await.map(|user| user.id), Some(1));
    assert!(notifier.last_success().is_some());
    assert_eq!(h.navigator.last(), Some(Route::Home));
    assert!(!controller.is_submitting().await);
    assert!(h.session.is_authenticated().await);
}

#[tokio::test]
async fn controller_shows_backend_message_on_failed_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Email not verified"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let (controller, notifier) = controller_over(&h);

    controller.login(Credentials::new("a@b.com", "pw")).await;

    assert_eq!(notifier.last_error().as_deref(), Some("Email not verified"));
    assert!(controller.current_user().await.is_none());
    assert!(!controller.is_submitting().await);
}

#[tokio::test]
async fn controller_falls_back_to_generic_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let (controller, notifier) = controller_over(&h);

    controller.login(Credentials::new("a@b.com", "pw")).await;
    assert_eq!(notifier.last_error().as_deref(), Some("Invalid credentials"));

    let registration = Registration {
        name: "Ada".to_string(),
        email: "ada@styleverse.io".to_string(),
        password: "pw".to_string(),
        role: Role::Customer,
    };
    controller.register(registration).await;
    assert_eq!(notifier.last_error().as_deref(), Some("Could not create account"));
}

#[tokio::test]
async fn controller_registration_stays_on_the_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"token": "t2", "user": {"id": 2}}})),
        )
        .mount(&server)
        .await;

    let h = harness(&server).await;
    let (controller, notifier) = controller_over(&h);

    let registration = Registration {
        name: "Ada".to_string(),
        email: "ada@styleverse.io".to_string(),
        password: "pw".to_string(),
        role: Role::Customer,
    };
    controller.register(registration).await;

    assert!(notifier.last_success().is_some());
    assert!(h.navigator.is_empty());
    assert!(!controller.is_submitting().await);
}
