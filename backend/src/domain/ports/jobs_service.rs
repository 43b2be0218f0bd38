//! Driving port for the job catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Job, JobFields, JobId, JobOrders, JobWithClients, UserId};

/// Job use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobsService: Send + Sync {
    /// Every job in the catalogue.
    async fn list(&self) -> Result<Vec<Job>, Error>;

    /// One job with every client that ordered it.
    async fn get(&self, job_id: JobId) -> Result<JobWithClients, Error>;

    /// Validate and store a new job.
    async fn create(&self, fields: JobFields) -> Result<Job, Error>;

    /// Merge `fields` over the stored job and store the result.
    async fn update(&self, job_id: JobId, fields: JobFields) -> Result<Job, Error>;

    /// Drop the caller's orders for a job, returning the job.
    ///
    /// Refused while any of those orders is in progress. The job itself
    /// stays in the catalogue.
    async fn remove_for_user(&self, user_id: UserId, job_id: JobId) -> Result<Job, Error>;

    /// The job with the caller's orders for it.
    async fn orders(&self, user_id: UserId, job_id: JobId) -> Result<JobOrders, Error>;
}
