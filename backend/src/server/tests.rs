//! End-to-end wiring of the assembled application.

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::security::Argon2Hasher;

#[fixture]
fn deps() -> AppDependencies {
    let params = argon2::Params::new(8, 1, 1, None).expect("valid params");
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: web::Data::new(in_memory_http_state(
            InMemoryStore::new(),
            Argon2Hasher::with_params(params),
        )),
        session: SessionSettings {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        },
    }
}

fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

#[rstest]
#[actix_web::test]
async fn registration_starts_a_session(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;

    let res = actix_test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "password123",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let cookie = session_cookie(&res);

    let res = actix_test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/v1/check_session")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["username"], "ada");
    assert_eq!(body["clients"], json!([]));

    let res = actix_test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/clients")
            .cookie(cookie)
            .set_json(json!({
                "name": "Grace",
                "email": "grace@example.com",
                "phone": "555-123-4567",
                "notes": "Met at the harbour market stall",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn api_routes_require_a_session(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;

    let res = actix_test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/clients").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Not authenticated");
}

#[rstest]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn probes_sit_outside_the_api_scope(deps: AppDependencies, #[case] path: &str) {
    let app = actix_test::init_service(build_app(deps)).await;

    let res = actix_test::call_service(&app, TestRequest::get().uri(path).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[cfg(debug_assertions)]
#[rstest]
#[actix_web::test]
async fn serves_openapi_document_in_debug_builds(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;

    let res = actix_test::call_service(
        &app,
        TestRequest::get().uri("/api-docs/openapi.json").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["info"]["title"], "Jobdesk API");
}
