//! Tests for account handlers.

use super::*;
use crate::domain::{ErrorCode, User, UserId};
use crate::inbound::http::test_utils::{MockPorts, json_body, session_cookie, signed_in, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

fn profile(id: i32) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        jobs: Vec::new(),
        clients: Vec::new(),
        orders: Vec::new(),
    }
}

fn profiles_returning(id: i32) -> MockPorts {
    let mut ports = MockPorts::default();
    ports
        .profiles
        .expect_profile()
        .withf(move |user_id| *user_id == UserId::new(id))
        .returning(move |_| Ok(profile(id)));
    ports
}

#[actix_web::test]
async fn register_creates_account_and_session() {
    let mut ports = profiles_returning(7);
    ports
        .accounts
        .expect_register()
        .withf(|registration| registration.username() == "ada")
        .return_once(|registration| {
            Ok(User {
                id: UserId::new(7),
                username: registration.username().to_owned(),
                email: registration.email().to_owned(),
            })
        });
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "password123"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let cookie = session_cookie(&res);
    let body = json_body(res).await;
    assert_eq!(body["id"], json!(7));
    assert_eq!(body["jobs"], json!([]));

    let check = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/check_session")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(check.status(), StatusCode::OK);
}

#[actix_web::test]
async fn register_reports_every_invalid_field() {
    let mut ports = MockPorts::default();
    ports.accounts.expect_register().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({ "username": "a", "email": "nope", "password": "short" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["message"], json!("Validation failed"));
    let fields = body["details"]["fields"].as_object().expect("field map");
    assert!(fields.contains_key("username"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("password"));
}

#[actix_web::test]
async fn register_surfaces_duplicate_account() {
    let mut ports = MockPorts::default();
    ports
        .accounts
        .expect_register()
        .return_once(|_| Err(Error::invalid_request("Email already exists")));
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "password123"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["message"], json!("Email already exists"));
}

#[actix_web::test]
async fn login_returns_profile_and_cookie() {
    let mut ports = profiles_returning(3);
    ports
        .accounts
        .expect_authenticate()
        .withf(|creds| creds.username() == "ada" && creds.password() == "password123")
        .return_once(|_| Ok(UserId::new(3)));
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                username: "ada".into(),
                password: "password123".into(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let _ = session_cookie(&res);
    assert_eq!(json_body(res).await["username"], json!("ada"));
}

#[rstest]
#[case("", "password123", "username", "empty_username")]
#[case("ada", "", "password", "empty_password")]
#[actix_web::test]
async fn login_rejects_blank_fields(
    #[case] username: &str,
    #[case] password: &str,
    #[case] field: &str,
    #[case] code: &str,
) {
    let mut ports = MockPorts::default();
    ports.accounts.expect_authenticate().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                username: username.into(),
                password: password.into(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"]["field"], json!(field));
    assert_eq!(body["details"]["code"], json!(code));
}

#[actix_web::test]
async fn login_with_bad_credentials_is_unauthorised() {
    let mut ports = MockPorts::default();
    ports
        .accounts
        .expect_authenticate()
        .return_once(|_| Err(Error::unauthorized("Invalid credentials")));
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "ada", "password": "wrong-password" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.response().cookies().next().is_none());
}

#[actix_web::test]
async fn check_session_without_cookie_is_unauthorised() {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/check_session")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = json_body(res).await;
    assert_eq!(body["message"], json!("Not authenticated"));
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;
    let cookie = signed_in(&app, 5).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let removal = session_cookie(&res);
    assert_eq!(removal.value(), "");
}

#[test]
fn register_request_fields_default_to_absent() {
    let request: RegisterRequest = serde_json::from_value(json!({})).expect("empty body");
    let errors = Registration::try_new(
        request.username.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    )
    .expect_err("nothing supplied");
    assert_eq!(Error::from(errors).code(), ErrorCode::InvalidRequest);
}
