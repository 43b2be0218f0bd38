//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountService, ClientsService, JobsService, OrdersService, ProfileQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and login.
    pub accounts: Arc<dyn AccountService>,
    /// User aggregate reads.
    pub profiles: Arc<dyn ProfileQuery>,
    /// Client management.
    pub clients: Arc<dyn ClientsService>,
    /// Job catalogue.
    pub jobs: Arc<dyn JobsService>,
    /// Order management.
    pub orders: Arc<dyn OrdersService>,
}
