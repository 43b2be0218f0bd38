//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by
//! outbound adapters. Driving ports (`*Service`, [`ProfileQuery`]) are
//! implemented by the domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::{define_port_error, define_repository_error};

mod account_service;
mod client_repository;
mod clients_service;
mod job_repository;
mod jobs_service;
mod order_repository;
mod orders_service;
mod password_hasher;
mod profile_query;
mod user_repository;

pub use account_service::AccountService;
#[cfg(test)]
pub use account_service::MockAccountService;
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError};
pub use clients_service::ClientsService;
#[cfg(test)]
pub use clients_service::MockClientsService;
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobRepository, JobRepositoryError};
pub use jobs_service::JobsService;
#[cfg(test)]
pub use jobs_service::MockJobsService;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use orders_service::MockOrdersService;
pub use orders_service::OrdersService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::ProfileQuery;
pub(crate) use user_repository::duplicate_account;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
