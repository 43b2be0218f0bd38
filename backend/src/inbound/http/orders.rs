//! Order handlers.
//!
//! Dates travel as `YYYY-MM-DD` strings and are parsed here so malformed
//! values fail before any domain rule runs.

use actix_web::{HttpResponse, delete, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, Error, JobId, Order, OrderFields, OrderId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_date};

/// Order create and update payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct OrderPayload {
    /// Client the work is for; must belong to the caller.
    pub client_id: Option<ClientId>,
    /// Job being performed.
    pub job_id: Option<JobId>,
    /// At least five characters.
    pub description: Option<String>,
    /// Free-text rate, at least ten characters.
    #[schema(example = "$45 per hour")]
    pub rate: Option<String>,
    /// At least ten characters.
    pub location: Option<String>,
    /// Calendar date.
    #[schema(example = "2024-03-01")]
    pub start_date: Option<String>,
    /// Calendar date on or after `start_date`.
    #[schema(example = "2024-03-15")]
    pub due_date: Option<String>,
    /// `pending`, `in progress`, `completed` or `canceled`.
    #[schema(example = "pending")]
    pub status: Option<String>,
}

impl TryFrom<OrderPayload> for OrderFields {
    type Error = Error;

    fn try_from(value: OrderPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: value.client_id,
            job_id: value.job_id,
            description: value.description,
            rate: value.rate,
            location: value.location,
            start_date: parse_optional_date(
                value.start_date.as_deref(),
                FieldName::new("start_date"),
            )?,
            due_date: parse_optional_date(value.due_date.as_deref(), FieldName::new("due_date"))?,
            status: value.status,
        })
    }
}

/// Body returned after deleting an order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDeleted {
    /// Confirmation text.
    pub message: String,
    /// The removed record.
    pub deleted_order: Order,
}

/// Create an order for one of the caller's clients.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Validation failed or malformed date", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Client belongs to another user", body = Error),
        (status = 404, description = "Client or job not found", body = Error)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
pub async fn create_order(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<OrderPayload>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let fields = OrderFields::try_from(payload.into_inner())?;
    let order = state.orders.create(user_id, fields).await?;
    Ok(HttpResponse::Created().json(order))
}

/// Merge the supplied fields over an order.
#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Validation failed or no data", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Order belongs to another user", body = Error),
        (status = 404, description = "Order, client or job not found", body = Error)
    ),
    tags = ["orders"],
    operation_id = "updateOrder"
)]
#[patch("/orders/{id}")]
pub async fn update_order(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<OrderId>,
    payload: web::Json<OrderPayload>,
) -> ApiResult<web::Json<Order>> {
    let user_id = session.require_user_id()?;
    let fields = OrderFields::try_from(payload.into_inner())?;
    let order = state
        .orders
        .update(user_id, path.into_inner(), fields)
        .await?;
    Ok(web::Json(order))
}

/// Delete one of the caller's orders.
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order deleted", body = OrderDeleted),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Order belongs to another user", body = Error),
        (status = 404, description = "Order not found", body = Error)
    ),
    tags = ["orders"],
    operation_id = "deleteOrder"
)]
#[delete("/orders/{id}")]
pub async fn delete_order(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<OrderId>,
) -> ApiResult<web::Json<OrderDeleted>> {
    let user_id = session.require_user_id()?;
    let deleted_order = state.orders.delete(user_id, path.into_inner()).await?;
    Ok(web::Json(OrderDeleted {
        message: "Order deleted successfully".to_owned(),
        deleted_order,
    }))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
