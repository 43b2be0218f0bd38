//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, the ports those adapters meet at, and the services that
//! implement the driving ports. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Job, Client, Order and their `*Fields` / `*Draft` companions.
//! - UserProfile: the nested aggregate returned on login and session checks.
//! - AccountDirectory, ProfileAssembler, ClientBook, JobCatalogue, OrderBook:
//!   domain services implementing the driving ports.

pub mod account_directory;
pub mod auth;
pub mod client;
pub mod client_book;
pub mod error;
pub mod ids;
pub mod job;
pub mod job_catalogue;
pub mod order;
pub mod order_book;
mod ownership;
pub mod ports;
pub mod profile;
pub mod profile_assembler;
#[cfg(test)]
pub(crate) mod service_test_helpers;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::account_directory::AccountDirectory;
pub use self::auth::{LoginCredentials, LoginValidationError, Registration};
pub use self::client::{Client, ClientDraft, ClientFields};
pub use self::client_book::ClientBook;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{ClientId, JobId, OrderId, UserId};
pub use self::job::{Job, JobDraft, JobFields};
pub use self::job_catalogue::JobCatalogue;
pub use self::order::{ORDER_STATUSES, Order, OrderDraft, OrderFields, OrderStatus, UnknownStatus};
pub use self::order_book::OrderBook;
pub use self::profile::{
    ClientOrders, ClientSummary, ClientWithJobs, JobOrders, JobWithClients, OrderDetails,
    OrderWithClient, OrderWithJob, UserProfile,
};
pub use self::profile_assembler::ProfileAssembler;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserCredentials};
pub use self::validation::ValidationErrors;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use jobdesk::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
