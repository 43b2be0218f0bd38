//! Port for the shared job catalogue.

use async_trait::async_trait;

use crate::domain::{Job, JobDraft, JobId};

use super::define_repository_error;

define_repository_error!(
    /// Errors raised by job repository adapters.
    JobRepositoryError,
    "job"
);

/// Storage for jobs. Jobs are global and not owned by any user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Every job, ordered by id.
    async fn list(&self) -> Result<Vec<Job>, JobRepositoryError>;

    /// Fetch one job.
    async fn find(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError>;

    /// Fetch several jobs, ordered by id. Unknown ids are skipped.
    async fn find_many(&self, ids: &[JobId]) -> Result<Vec<Job>, JobRepositoryError>;

    /// Insert a job.
    async fn create(&self, draft: &JobDraft) -> Result<Job, JobRepositoryError>;

    /// Replace the stored content. `None` when the job vanished.
    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<Option<Job>, JobRepositoryError>;
}
