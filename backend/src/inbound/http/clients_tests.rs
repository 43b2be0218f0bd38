//! Tests for client handlers.

use super::*;
use crate::domain::service_test_helpers::{sample_client, sample_job, sample_order};
use crate::domain::{OrderStatus, OrderWithJob, UserId};
use crate::inbound::http::test_utils::{MockPorts, json_body, signed_in, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::json;

#[actix_web::test]
async fn list_requires_a_session() {
    let mut ports = MockPorts::default();
    ports.clients.expect_list().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/clients").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn list_returns_the_callers_clients() {
    let mut ports = MockPorts::default();
    ports
        .clients
        .expect_list()
        .withf(|user_id| *user_id == UserId::new(2))
        .return_once(|_| Ok(vec![sample_client(1, 2), sample_client(4, 2)]));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/clients")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body[1]["id"], json!(4));
    assert_eq!(body[0]["phone"], json!("555-123-4567"));
}

#[actix_web::test]
async fn create_passes_fields_through_and_returns_201() {
    let mut ports = MockPorts::default();
    ports
        .clients
        .expect_create()
        .withf(|user_id, fields| {
            *user_id == UserId::new(2)
                && fields.name.as_deref() == Some("Grace Hopper")
                && fields.company.is_none()
        })
        .return_once(|_, _| Ok(sample_client(9, 2)));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/clients")
            .cookie(cookie)
            .set_json(json!({
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "phone": "555-222-3333",
                "notes": "Prefers morning appointments"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(json_body(res).await["id"], json!(9));
}

#[actix_web::test]
async fn update_maps_forbidden() {
    let mut ports = MockPorts::default();
    ports
        .clients
        .expect_update()
        .return_once(|_, _, _| Err(Error::forbidden("Unauthorized access to client")));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/clients/3")
            .cookie(cookie)
            .set_json(json!({ "name": "New name" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(res).await["message"],
        json!("Unauthorized access to client")
    );
}

#[actix_web::test]
async fn delete_wraps_the_removed_client() {
    let mut ports = MockPorts::default();
    ports
        .clients
        .expect_delete()
        .withf(|user_id, client_id| *user_id == UserId::new(2) && *client_id == ClientId::new(3))
        .return_once(|_, _| Ok(sample_client(3, 2)));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/clients/3")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["message"], json!("Client deleted successfully"));
    assert_eq!(body["deleted_client"]["id"], json!(3));
}

#[actix_web::test]
async fn orders_embed_jobs() {
    let mut ports = MockPorts::default();
    ports.clients.expect_orders().return_once(|_, _| {
        Ok(ClientOrders {
            client: sample_client(3, 2),
            orders: vec![OrderWithJob {
                order: sample_order(8, 2, 3, 5, OrderStatus::InProgress),
                job: sample_job(5),
            }],
        })
    });
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/clients/3/orders")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["client"]["id"], json!(3));
    assert_eq!(body["orders"][0]["status"], json!("in progress"));
    assert_eq!(body["orders"][0]["job"]["id"], json!(5));
}

#[actix_web::test]
async fn malformed_json_uses_the_error_envelope() {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;
    let cookie = signed_in(&app, 2).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/clients")
            .cookie(cookie)
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"]["code"], json!("invalid_body"));
}
