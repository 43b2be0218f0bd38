//! The global job catalogue.
//!
//! This is not the same data as [`crate::UserProfile::jobs`], which only
//! lists jobs the user has orders for. Both are re-fetched after any job
//! mutation made through [`crate::Workspace`].

use tokio::sync::watch;
use tracing::debug;

use super::{SessionState, while_loading};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::model::{Job, JobId, JobPayload};

/// Snapshot of the catalogue cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobsState {
    /// Jobs in backend order.
    pub jobs: Vec<Job>,
    /// Fetches that have not yet settled.
    pub in_flight: usize,
}

impl JobsState {
    /// Whether any fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// Holder of the job catalogue.
#[derive(Debug)]
pub struct JobsStore {
    api: ApiClient,
    state: watch::Sender<JobsState>,
}

impl JobsStore {
    /// Empty store.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(JobsState::default());
        Self { api, state }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> JobsState {
        self.state.borrow().clone()
    }

    /// Change notifications. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<JobsState> {
        self.state.subscribe()
    }

    /// Replace the catalogue with the backend's.
    ///
    /// # Errors
    ///
    /// Propagates transport and server failures; the cache is unchanged.
    pub async fn fetch(&self) -> Result<Vec<Job>, ClientError> {
        let jobs = while_loading(&self.state, self.api.list_jobs()).await?;
        debug!(count = jobs.len(), "job catalogue fetched");
        self.state.send_modify(|state| state.jobs.clone_from(&jobs));
        Ok(jobs)
    }

    /// Follow the session: clear when signed out, fetch when signed in.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures.
    pub async fn sync_with_session(&self, session: &SessionState) -> Result<(), ClientError> {
        if session.is_signed_in() {
            self.fetch().await.map(drop)
        } else {
            self.clear();
            Ok(())
        }
    }

    /// Create a job, then reload the catalogue.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid input, or when the
    /// reload fails.
    pub async fn create(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        let job = self.api.create_job(payload).await?;
        self.fetch().await?;
        Ok(job)
    }

    /// Remove the caller's orders for a job, then reload the catalogue.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status while an order for the job is in progress.
    pub async fn delete(&self, id: JobId) -> Result<Job, ClientError> {
        let job = self.api.remove_job(id).await?;
        self.fetch().await?;
        Ok(job)
    }

    /// Drop every cached job.
    pub fn clear(&self) {
        self.state.send_modify(|state| state.jobs.clear());
    }
}
