//! Tests for order handlers.

use super::*;
use crate::domain::service_test_helpers::sample_order;
use crate::domain::{OrderStatus, UserId};
use crate::inbound::http::test_utils::{MockPorts, json_body, signed_in, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;

fn order_body() -> serde_json::Value {
    json!({
        "client_id": 1,
        "job_id": 2,
        "description": "Paint the fence",
        "rate": "$30 per hour",
        "location": "14 Birch Road",
        "start_date": "2024-06-01",
        "due_date": "2024-06-10"
    })
}

#[actix_web::test]
async fn create_parses_dates_before_calling_the_port() {
    let mut ports = MockPorts::default();
    ports
        .orders
        .expect_create()
        .withf(|user_id, fields| {
            *user_id == UserId::new(4)
                && fields.start_date == NaiveDate::from_ymd_opt(2024, 6, 1)
                && fields.client_id == Some(ClientId::new(1))
                && fields.status.is_none()
        })
        .return_once(|_, _| Ok(sample_order(11, 4, 1, 2, OrderStatus::Pending)));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/orders")
            .cookie(cookie)
            .set_json(order_body())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = json_body(res).await;
    assert_eq!(body["id"], json!(11));
    assert_eq!(body["status"], json!("pending"));
}

#[rstest]
#[case("start_date", "2024-13-01")]
#[case("due_date", "tomorrow")]
#[actix_web::test]
async fn malformed_dates_are_rejected(#[case] field: &str, #[case] value: &str) {
    let mut ports = MockPorts::default();
    ports.orders.expect_create().never();
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;
    let mut body = order_body();
    body[field] = json!(value);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/orders")
            .cookie(cookie)
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["details"]["field"], json!(field));
    assert_eq!(body["details"]["value"], json!(value));
    assert_eq!(body["details"]["code"], json!("invalid_date"));
}

#[actix_web::test]
async fn update_with_empty_body_reaches_the_port() {
    let mut ports = MockPorts::default();
    ports
        .orders
        .expect_update()
        .withf(|_, order_id, fields| {
            *order_id == OrderId::new(11) && *fields == OrderFields::default()
        })
        .return_once(|_, _, _| Err(Error::invalid_request("No data provided")));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/orders/11")
            .cookie(cookie)
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["message"], json!("No data provided"));
}

#[actix_web::test]
async fn update_with_blank_date_reports_it_as_required() {
    let mut ports = MockPorts::default();
    ports.orders.expect_update().never();
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/orders/11")
            .cookie(cookie)
            .set_json(json!({"start_date": "", "rate": "$45 per hour"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(
        body["details"]["fields"]["start_date"],
        json!("Start date is required")
    );
}

#[actix_web::test]
async fn delete_wraps_the_removed_order() {
    let mut ports = MockPorts::default();
    ports
        .orders
        .expect_delete()
        .return_once(|_, _| Ok(sample_order(11, 4, 1, 2, OrderStatus::Completed)));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/orders/11")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["message"], json!("Order deleted successfully"));
    assert_eq!(body["deleted_order"]["status"], json!("completed"));
}

#[actix_web::test]
async fn missing_order_is_not_found() {
    let mut ports = MockPorts::default();
    ports
        .orders
        .expect_delete()
        .return_once(|_, _| Err(Error::not_found("Order not found")));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = signed_in(&app, 4).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/orders/404")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
