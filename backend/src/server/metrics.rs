//! Prometheus request metrics behind the `metrics` feature.
//!
//! Each call to [`make_metrics`] registers into its own registry, so several
//! servers (or tests) in one process never clash on metric names.

use std::collections::HashMap;
use std::sync::Arc;

use actix_service::boxed::{self, BoxService};
use actix_service::{Service, ServiceExt as _, Transform};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use prometheus::Registry;

/// Path the scrape endpoint is served on.
pub const METRICS_PATH: &str = "/metrics";

/// Build the Prometheus middleware serving [`METRICS_PATH`].
///
/// Probe traffic is excluded so scrapes reflect API usage only.
///
/// # Errors
/// Returns the builder error when the registry rejects the metrics.
pub fn make_metrics() -> Result<PrometheusMetrics, Box<dyn std::error::Error + Send + Sync>> {
    let labels = HashMap::from([(
        "version".to_owned(),
        env!("CARGO_PKG_VERSION").to_owned(),
    )]);
    PrometheusMetricsBuilder::new("jobdesk")
        .registry(Registry::new())
        .endpoint(METRICS_PATH)
        .const_labels(labels)
        .exclude("/health/ready")
        .exclude("/health/live")
        .build()
}

/// Prometheus middleware when configured, a pass-through otherwise.
///
/// Both arms box the inner service so the app type does not depend on
/// whether metrics were configured at startup.
#[derive(Clone)]
pub(crate) struct MetricsLayer(Option<Arc<PrometheusMetrics>>);

impl MetricsLayer {
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        Self(metrics.map(Arc::new))
    }
}

type BoxedApp = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxedApp;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(metrics) = self.0.clone() else {
            let passthrough =
                service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(async move { Ok(boxed::service(passthrough)) });
        };
        let measured = Compat::new((*metrics).clone()).new_transform(service);
        Box::pin(async move { Ok(boxed::service(measured.await?)) })
    }
}
