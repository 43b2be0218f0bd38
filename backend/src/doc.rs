//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler, the domain read models and the
//! session cookie security scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Client, ClientId, ClientOrders, ClientSummary, ClientWithJobs, Error, ErrorCode, Job, JobId,
    JobOrders, JobWithClients, Order, OrderDetails, OrderId, OrderStatus, OrderWithClient,
    OrderWithJob, User, UserId, UserProfile,
};
use crate::inbound::http::accounts::{LoginRequest, RegisterRequest};
use crate::inbound::http::clients::{ClientDeleted, ClientPayload};
use crate::inbound::http::jobs::{JobPayload, JobRemoved};
use crate::inbound::http::orders::{OrderDeleted, OrderPayload};
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Session cookie issued by POST /api/v1/login or /api/v1/register.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Jobdesk API",
        description = "Session-authenticated management of clients, jobs and work orders.",
        license(
            name = "MIT",
            url = "https://opensource.org/license/mit"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::check_session,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::clients::list_clients,
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::update_client,
        crate::inbound::http::clients::delete_client,
        crate::inbound::http::clients::client_orders,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::jobs::get_job,
        crate::inbound::http::jobs::update_job,
        crate::inbound::http::jobs::remove_job,
        crate::inbound::http::jobs::job_orders,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::update_order,
        crate::inbound::http::orders::delete_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error, ErrorCode, UserId, ClientId, JobId, OrderId, User, Client, Job, Order,
        OrderStatus, ClientSummary, JobWithClients, ClientWithJobs, OrderDetails, OrderWithJob,
        OrderWithClient, ClientOrders, JobOrders, UserProfile, LoginRequest, RegisterRequest,
        ClientPayload, JobPayload, OrderPayload, ClientDeleted, JobRemoved, OrderDeleted,
    )),
    tags(
        (name = "accounts", description = "Registration, login and session checks"),
        (name = "clients", description = "Clients owned by the signed-in user"),
        (name = "jobs", description = "Shared job catalogue"),
        (name = "orders", description = "Work orders linking a client to a job"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
