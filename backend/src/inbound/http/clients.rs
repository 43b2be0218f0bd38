//! Client management handlers.
//!
//! Every route requires a session; clients are always scoped to the
//! signed-in user.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Client, ClientFields, ClientId, ClientOrders, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Client create and update payload. Absent fields keep stored values on
/// `PATCH`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ClientPayload {
    /// 2 to 30 letters, digits, spaces, hyphens, apostrophes or periods.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// `###-###-####`.
    #[schema(example = "555-010-4477")]
    pub phone: Option<String>,
    /// Optional company name.
    pub company: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
    /// 20 to 1000 characters.
    pub notes: Option<String>,
}

impl From<ClientPayload> for ClientFields {
    fn from(value: ClientPayload) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            address: value.address,
            notes: value.notes,
        }
    }
}

/// Body returned after deleting a client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientDeleted {
    /// Confirmation text.
    pub message: String,
    /// The removed record.
    pub deleted_client: Client,
}

/// List the caller's clients ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    responses(
        (status = 200, description = "Owned clients", body = [Client]),
        (status = 401, description = "Not authenticated", body = Error)
    ),
    tags = ["clients"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list_clients(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Client>>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(state.clients.list(user_id).await?))
}

/// Create a client owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Validation failed", body = Error),
        (status = 401, description = "Not authenticated", body = Error)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ClientPayload>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let client = state
        .clients
        .create(user_id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(client))
}

/// Merge the supplied fields over a client.
#[utoipa::path(
    patch,
    path = "/api/v1/clients/{id}",
    params(("id" = i32, Path, description = "Client identifier")),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Validation failed or no data", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Client belongs to another user", body = Error),
        (status = 404, description = "Client not found", body = Error)
    ),
    tags = ["clients"],
    operation_id = "updateClient"
)]
#[patch("/clients/{id}")]
pub async fn update_client(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ClientId>,
    payload: web::Json<ClientPayload>,
) -> ApiResult<web::Json<Client>> {
    let user_id = session.require_user_id()?;
    let client = state
        .clients
        .update(user_id, path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(client))
}

/// Delete a client that has no orders.
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    params(("id" = i32, Path, description = "Client identifier")),
    responses(
        (status = 200, description = "Client deleted", body = ClientDeleted),
        (status = 400, description = "Client still has orders", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Client belongs to another user", body = Error),
        (status = 404, description = "Client not found", body = Error)
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn delete_client(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ClientId>,
) -> ApiResult<web::Json<ClientDeleted>> {
    let user_id = session.require_user_id()?;
    let deleted_client = state.clients.delete(user_id, path.into_inner()).await?;
    Ok(web::Json(ClientDeleted {
        message: "Client deleted successfully".to_owned(),
        deleted_client,
    }))
}

/// A client with its orders, each embedding the ordered job.
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}/orders",
    params(("id" = i32, Path, description = "Client identifier")),
    responses(
        (status = 200, description = "Client orders", body = ClientOrders),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 403, description = "Client belongs to another user", body = Error),
        (status = 404, description = "Client not found", body = Error)
    ),
    tags = ["clients"],
    operation_id = "clientOrders"
)]
#[get("/clients/{id}/orders")]
pub async fn client_orders(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ClientId>,
) -> ApiResult<web::Json<ClientOrders>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(
        state.clients.orders(user_id, path.into_inner()).await?,
    ))
}

#[cfg(test)]
#[path = "clients_tests.rs"]
mod tests;
