//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain records.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! ```no_run
//! use jobdesk::outbound::persistence::{DbPool, DieselJobRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(&PoolConfig::new("postgres://localhost/jobdesk")).await?;
//! let jobs = DieselJobRepository::new(pool);
//! # let _ = jobs;
//! # Ok(())
//! # }
//! ```

mod diesel_client_repository;
mod diesel_job_repository;
mod diesel_order_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_client_repository::DieselClientRepository;
pub use diesel_job_repository::DieselJobRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
