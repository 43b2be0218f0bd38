//! Client-side access to the jobdesk API.
//!
//! The crate keeps one signed-in user's aggregate in memory and derives every
//! listing from it, so screens never ask the backend for filtered data.
//!
//! # Overview
//!
//! - [`ApiClient`]: typed wrapper over every backend route. It keeps a cookie
//!   jar, so the session cookie set at login is replayed on later calls.
//! - [`SessionStore`]: the signed-in [`UserProfile`] and a count of calls in flight.
//! - [`JobsStore`]: the global job catalogue.
//! - [`Workspace`]: owns both stores and performs every mutation, then
//!   re-fetches whatever the mutation could have changed.
//! - [`views`]: pure filters over a profile snapshot.
//! - [`forms`]: edit-form prefill and PATCH payload construction.
//!
//! # Example
//!
//! ```no_run
//! use jobdesk_client::{ClientConfig, Workspace};
//!
//! # async fn run() -> Result<(), jobdesk_client::ClientError> {
//! let workspace = Workspace::new(ClientConfig::new("http://localhost:8080")?)?;
//! workspace.bootstrap().await?;
//! if workspace.session().profile().is_none() {
//!     workspace.login("john_doe", "password123").await?;
//! }
//! let jobs = workspace.jobs().snapshot().jobs;
//! println!("{} jobs in the catalogue", jobs.len());
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod error;
pub mod forms;
pub mod model;
mod store;
pub mod views;
mod workspace;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use model::{
    Client, ClientId, ClientOrders, ClientPayload, ClientSummary, ClientWithJobs, Job, JobId,
    JobOrders, JobPayload, JobWithClients, Order, OrderDetails, OrderId, OrderPayload,
    OrderStatus, OrderWithClient, OrderWithJob, UserId, UserProfile,
};
pub use store::{JobsState, JobsStore, SessionState, SessionStore};
pub use workspace::Workspace;
