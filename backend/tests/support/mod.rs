//! Shared harness for HTTP flow tests.

use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{Error, web};
use actix_http::Request;
use serde_json::{Value, json};

use jobdesk::inbound::http::health::HealthState;
use jobdesk::server::{AppDependencies, build_app};
use jobdesk::test_support::{in_memory_state, test_session_settings};

/// Initialise the full application over a fresh in-memory store.
pub async fn app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    actix_test::init_service(build_app(AppDependencies {
        health_state,
        http_state: web::Data::new(in_memory_state()),
        session: test_session_settings(),
    }))
    .await
}

/// Register `username` and return the session cookie.
pub async fn register<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let res = actix_test::call_service(
        app,
        TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "password123",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201, "registration of {username}");
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}

/// Send `request` and return the status with the JSON body (`Null` if empty).
pub async fn send<S>(app: &S, request: TestRequest) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let res = actix_test::call_service(app, request.to_request()).await;
    let status = res.status().as_u16();
    let bytes = actix_test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

pub fn client_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": "client@example.com",
        "phone": "555-123-4567",
        "notes": "Prefers mornings and contact by email",
    })
}

pub fn job_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Clean every window inside and out",
        "category": "Cleaning",
        "duration": "2 days",
    })
}

pub fn order_body(client_id: &Value, job_id: &Value, status: &str) -> Value {
    json!({
        "client_id": client_id,
        "job_id": job_id,
        "description": "Spring clean of the shop front",
        "rate": "$30 per hour",
        "location": "12 Harbour Street",
        "start_date": "2024-04-01",
        "due_date": "2024-04-03",
        "status": status,
    })
}
