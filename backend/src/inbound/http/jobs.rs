//! Job catalogue handlers.
//!
//! Reading the catalogue is public. Changing it, or removing a job from the
//! caller's workload, needs a session.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Job, JobFields, JobId, JobOrders, JobWithClients};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Job create and update payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct JobPayload {
    /// At least five characters.
    #[schema(example = "Garden clearance")]
    pub title: Option<String>,
    /// At least ten characters.
    pub description: Option<String>,
    /// Free-form category.
    #[schema(example = "Landscaping")]
    pub category: Option<String>,
    /// Free-form duration.
    #[schema(example = "2 days")]
    pub duration: Option<String>,
}

impl From<JobPayload> for JobFields {
    fn from(value: JobPayload) -> Self {
        Self {
            title: value.title,
            description: value.description,
            category: value.category,
            duration: value.duration,
        }
    }
}

/// Body returned after removing a job from the caller's workload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JobRemoved {
    /// Confirmation text.
    pub message: String,
    /// The job whose orders were deleted. The job itself is kept.
    pub removed_job: Job,
}

/// List the whole catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses((status = 200, description = "All jobs", body = [Job])),
    tags = ["jobs"],
    operation_id = "listJobs",
    security([])
)]
#[get("/jobs")]
pub async fn list_jobs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Job>>> {
    Ok(web::Json(state.jobs.list().await?))
}

/// Add a job to the catalogue.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = JobPayload,
    responses(
        (status = 201, description = "Job created", body = Job),
        (status = 400, description = "Validation failed", body = Error),
        (status = 401, description = "Not authenticated", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "createJob"
)]
#[post("/jobs")]
pub async fn create_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<JobPayload>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let job = state.jobs.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(job))
}

/// One job with every client that has ordered it.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(("id" = i32, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "Job details", body = JobWithClients),
        (status = 404, description = "Job not found", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "getJob",
    security([])
)]
#[get("/jobs/{id}")]
pub async fn get_job(
    state: web::Data<HttpState>,
    path: web::Path<JobId>,
) -> ApiResult<web::Json<JobWithClients>> {
    Ok(web::Json(state.jobs.get(path.into_inner()).await?))
}

/// Merge the supplied fields over a job.
#[utoipa::path(
    patch,
    path = "/api/v1/jobs/{id}",
    params(("id" = i32, Path, description = "Job identifier")),
    request_body = JobPayload,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 400, description = "Validation failed or no data", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 404, description = "Job not found", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "updateJob"
)]
#[patch("/jobs/{id}")]
pub async fn update_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<JobId>,
    payload: web::Json<JobPayload>,
) -> ApiResult<web::Json<Job>> {
    session.require_user_id()?;
    let job = state
        .jobs
        .update(path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(job))
}

/// Delete every order the caller holds for a job.
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    params(("id" = i32, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "Job removed from the caller", body = JobRemoved),
        (status = 400, description = "An order is in progress", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 404, description = "Job or orders not found", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "removeJob"
)]
#[delete("/jobs/{id}")]
pub async fn remove_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<JobId>,
) -> ApiResult<web::Json<JobRemoved>> {
    let user_id = session.require_user_id()?;
    let removed_job = state
        .jobs
        .remove_for_user(user_id, path.into_inner())
        .await?;
    Ok(web::Json(JobRemoved {
        message: "Job removed from user successfully".to_owned(),
        removed_job,
    }))
}

/// The caller's orders for a job, each embedding its client.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}/orders",
    params(("id" = i32, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "Job orders", body = JobOrders),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 404, description = "Job not found", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "jobOrders"
)]
#[get("/jobs/{id}/orders")]
pub async fn job_orders(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<JobId>,
) -> ApiResult<web::Json<JobOrders>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(state.jobs.orders(user_id, path.into_inner()).await?))
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
