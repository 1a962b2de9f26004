use axum::http::{Method, StatusCode, header};
use recipe_core::application::ApplicationError;
use recipe_core::application::commands::users::{
    ActivateAccountCommand, LoginUserCommand, RegisterUserCommand,
};
use recipe_core::domain::user::Role;
use serde_json::json;

mod support;

use support::{PUBLIC_BASE_URL, TEST_PASSWORD, TestApp};

fn registration(username: &str, email: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        first_name: "Ada".into(),
        last_name: "Baker".into(),
        email: email.into(),
        password: TEST_PASSWORD.into(),
        confirm_password: TEST_PASSWORD.into(),
    }
}

fn login(username: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn registration_stores_inactive_account_and_sends_link() {
    let app = TestApp::new();

    let user = app
        .services
        .user_commands
        .register(registration("ada", "ada@example.com"))
        .await
        .unwrap();

    assert!(!user.is_active);
    let link = app.notifier.link_for("ada").expect("link");
    assert!(link.starts_with(&format!("{PUBLIC_BASE_URL}/api/v1/auth/activate/")));
}

#[tokio::test]
async fn first_account_is_admin_and_later_ones_are_members() {
    let app = TestApp::new();
    let users = &app.services.user_commands;

    let first = users.register(registration("first", "first@example.com")).await.unwrap();
    let second = users.register(registration("second", "second@example.com")).await.unwrap();

    assert_eq!(first.role, Role::Admin);
    assert_eq!(second.role, Role::Member);
}

#[tokio::test]
async fn concurrent_first_registrations_yield_one_admin() {
    let app = TestApp::new();
    let users = &app.services.user_commands;

    let (left, right) = tokio::join!(
        users.register(registration("left", "left@example.com")),
        users.register(registration("right", "right@example.com")),
    );

    let roles = [left.unwrap().role, right.unwrap().role];
    assert_eq!(roles.iter().filter(|r| **r == Role::Admin).count(), 1);
    assert_eq!(roles.iter().filter(|r| **r == Role::Member).count(), 1);
}

#[tokio::test]
async fn mismatched_passwords_are_rejected() {
    let app = TestApp::new();
    let mut command = registration("ada", "ada@example.com");
    command.confirm_password = "something-else".into();

    let err = app.services.user_commands.register(command).await.unwrap_err();

    match err {
        ApplicationError::Validation(message) => assert_eq!(message, "passwords do not match"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app.notifier.count(), 0);
}

#[tokio::test]
async fn duplicate_email_and_username_conflict() {
    let app = TestApp::new();
    let users = &app.services.user_commands;
    users.register(registration("ada", "ada@example.com")).await.unwrap();

    let email_err = users
        .register(registration("other", "ada@example.com"))
        .await
        .unwrap_err();
    let name_err = users
        .register(registration("ada", "another@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(email_err, ApplicationError::Conflict(_)));
    assert!(matches!(name_err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn login_requires_activation() {
    let app = TestApp::new();
    app.register("ada").await;

    let err = app
        .services
        .user_commands
        .login(login("ada", TEST_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InactiveAccount(_)));

    app.activate("ada").await;
    let session = app
        .services
        .user_commands
        .login(login("ada", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(session.username, "ada");
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register("ada").await;
    app.activate("ada").await;

    let err = app
        .services
        .user_commands
        .login(login("ada", "not-the-password"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn activation_link_works_once() {
    let app = TestApp::new();
    app.register("ada").await;
    let (uid, token) = app.notifier.activation_parts("ada").unwrap();
    let users = &app.services.user_commands;

    let activated = users
        .activate(ActivateAccountCommand {
            uid: uid.clone(),
            token: token.clone(),
        })
        .await
        .unwrap();
    assert_eq!(activated.username, "ada");
    assert!(app.store.user("ada").unwrap().is_active);

    let err = users
        .activate(ActivateAccountCommand { uid, token })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn tampered_activation_token_is_rejected() {
    let app = TestApp::new();
    app.register("ada").await;
    let (uid, _) = app.notifier.activation_parts("ada").unwrap();

    let err = app
        .services
        .user_commands
        .activate(ActivateAccountCommand {
            uid,
            token: "0-forged".into(),
        })
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation(message) => {
            assert_eq!(message, "activation link is invalid")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!app.store.user("ada").unwrap().is_active);
}

#[tokio::test]
async fn http_register_returns_created() {
    let app = TestApp::new();
    let router = app.router();

    let resp = support::send(
        &router,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": TEST_PASSWORD,
            "confirm_password": TEST_PASSWORD
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = support::json_body(resp).await;
    assert_eq!(body["username"], "ada");
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
async fn http_activation_returns_json_without_redirect() {
    let app = TestApp::new();
    app.register("ada").await;
    let (uid, token) = app.notifier.activation_parts("ada").unwrap();
    let router = app.router();

    let resp = support::send(
        &router,
        Method::GET,
        &format!("/api/v1/auth/activate/{uid}/{token}"),
        None,
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(body["username"], "ada");
}

#[tokio::test]
async fn http_activation_redirects_when_configured() {
    let app = TestApp::builder()
        .with_activation_redirect("https://recipes.test/welcome")
        .build();
    app.register("ada").await;
    let (uid, token) = app.notifier.activation_parts("ada").unwrap();
    let router = app.router();

    let resp = support::send(
        &router,
        Method::GET,
        &format!("/api/v1/auth/activate/{uid}/{token}"),
        None,
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://recipes.test/welcome"
    );
}

#[tokio::test]
async fn http_bad_activation_link_is_bad_request() {
    let app = TestApp::new();
    let router = app.router();

    let resp = support::send(
        &router,
        Method::GET,
        "/api/v1/auth/activate/not-a-uid/abc",
        None,
        None,
    )
    .await;

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn http_login_then_logout_revokes_token() {
    let app = TestApp::new();
    app.register("ada").await;
    app.activate("ada").await;
    let router = app.router();

    let resp = support::send(
        &router,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "ada", "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    let token = body["token"].as_str().expect("token").to_string();
    assert_eq!(body["username"], "ada");

    let resp = support::send(&router, Method::GET, "/api/v1/my-profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = support::send(&router, Method::POST, "/api/v1/auth/logout", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = support::send(&router, Method::GET, "/api/v1/my-profile", Some(&token), None).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn http_login_before_activation_is_forbidden() {
    let app = TestApp::new();
    app.register("ada").await;
    let router = app.router();

    let resp = support::send(
        &router,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "ada", "password": TEST_PASSWORD })),
    )
    .await;

    support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn http_profile_shows_and_updates_caller() {
    let app = TestApp::new();
    let token = app.sign_up("ada").await;
    let router = app.router();

    let resp = support::send(&router, Method::GET, "/api/v1/my-profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(body["user"]["username"], "ada");
    assert_eq!(body["user"]["role"], "admin");
    assert!(
        body["capabilities"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c == "categories:manage")
    );

    let resp = support::send(
        &router,
        Method::PATCH,
        "/api/v1/my-profile",
        Some(&token),
        Some(json!({ "first_name": "Augusta", "email": "augusta@Example.com" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(body["user"]["first_name"], "Augusta");
    assert_eq!(body["user"]["email"], "augusta@example.com");
    assert_eq!(body["user"]["last_name"], "Cook");
}

#[tokio::test]
async fn http_profile_rejects_taken_username() {
    let app = TestApp::new();
    app.sign_up("ada").await;
    let token = app.sign_up("grace").await;
    let router = app.router();

    let resp = support::send(
        &router,
        Method::PATCH,
        "/api/v1/my-profile",
        Some(&token),
        Some(json!({ "username": "ada" })),
    )
    .await;

    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}
