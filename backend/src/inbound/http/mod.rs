//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers translate requests into calls on the driving ports held in
//! [`state::HttpState`] and never touch persistence directly.

pub mod accounts;
pub mod clients;
pub mod error;
pub mod health;
pub mod jobs;
pub mod orders;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`.
///
/// The caller wraps the scope in the session middleware and provides
/// [`state::HttpState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(accounts::register)
        .service(accounts::login)
        .service(accounts::check_session)
        .service(accounts::logout)
        .service(clients::list_clients)
        .service(clients::create_client)
        .service(clients::update_client)
        .service(clients::delete_client)
        .service(clients::client_orders)
        .service(jobs::list_jobs)
        .service(jobs::create_job)
        .service(jobs::get_job)
        .service(jobs::update_job)
        .service(jobs::remove_job)
        .service(jobs::job_orders)
        .service(orders::create_order)
        .service(orders::update_order)
        .service(orders::delete_order);
}
