//! Job, client and order management backend.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, ports and
//! services; [`inbound`] exposes them over HTTP; [`outbound`] implements the
//! driven ports for PostgreSQL, process memory and password hashing.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
