//! The single entry point for mutations.
//!
//! Every successful mutation re-fetches what it could have changed: the
//! session aggregate always, and the job catalogue as well for job
//! mutations. Nothing is patched locally from a mutation response.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    Client, ClientId, ClientPayload, Job, JobId, JobPayload, Order, OrderId, OrderPayload,
    UserProfile,
};
use crate::store::{JobsStore, SessionStore};

/// API client plus both caches.
#[derive(Debug)]
pub struct Workspace {
    api: ApiClient,
    session: SessionStore,
    jobs: JobsStore,
}

impl Workspace {
    /// Workspace for the backend at `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    /// Workspace over an existing client; stores share its cookie jar.
    #[must_use]
    pub fn with_api(api: ApiClient) -> Self {
        Self {
            session: SessionStore::new(api.clone()),
            jobs: JobsStore::new(api.clone()),
            api,
        }
    }

    /// Session cache, for reading and subscribing.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Job catalogue cache, for reading and subscribing.
    #[must_use]
    pub const fn jobs(&self) -> &JobsStore {
        &self.jobs
    }

    /// Underlying API client, for reads the caches do not cover.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Startup: check the session once, then load or clear the catalogue.
    ///
    /// # Errors
    ///
    /// Propagates transport and server failures.
    pub async fn bootstrap(&self) -> Result<(), ClientError> {
        self.session.bootstrap().await?;
        self.jobs.sync_with_session(&self.session.snapshot()).await
    }

    /// Sign in, then load the catalogue.
    ///
    /// # Errors
    ///
    /// Fails with a 401 status on bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let profile = self.session.login(username, password).await?;
        self.jobs.sync_with_session(&self.session.snapshot()).await?;
        Ok(profile)
    }

    /// Register and sign in, then load the catalogue.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid details.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ClientError> {
        let profile = self.session.register(username, email, password).await?;
        self.jobs.sync_with_session(&self.session.snapshot()).await?;
        Ok(profile)
    }

    /// Sign out and clear both caches.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.session.logout().await?;
        self.jobs.sync_with_session(&self.session.snapshot()).await
    }

    /// Create a job.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid input.
    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        let job = self.jobs.create(payload).await?;
        self.session.refresh().await?;
        Ok(job)
    }

    /// Update a job.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status on invalid input and 404 for unknown jobs.
    pub async fn update_job(&self, id: JobId, payload: &JobPayload) -> Result<Job, ClientError> {
        let job = self.api.update_job(id, payload).await?;
        self.reconcile_jobs().await?;
        Ok(job)
    }

    /// Remove the user's orders for a job.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status while one of those orders is in progress.
    pub async fn remove_job(&self, id: JobId) -> Result<Job, ClientError> {
        let job = self.jobs.delete(id).await?;
        self.session.refresh().await?;
        Ok(job)
    }

    /// Create a client.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid input.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, ClientError> {
        let client = self.api.create_client(payload).await?;
        self.session.refresh().await?;
        Ok(client)
    }

    /// Update a client.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status on invalid input or an empty payload.
    pub async fn update_client(
        &self,
        id: ClientId,
        payload: &ClientPayload,
    ) -> Result<Client, ClientError> {
        let client = self.api.update_client(id, payload).await?;
        self.session.refresh().await?;
        Ok(client)
    }

    /// Delete a client without orders.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status while orders reference the client.
    pub async fn delete_client(&self, id: ClientId) -> Result<Client, ClientError> {
        let client = self.api.delete_client(id).await?;
        self.session.refresh().await?;
        Ok(client)
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid input.
    pub async fn create_order(&self, payload: &OrderPayload) -> Result<Order, ClientError> {
        let order = self.api.create_order(payload).await?;
        self.session.refresh().await?;
        Ok(order)
    }

    /// Update an order.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status when the merged order is invalid.
    pub async fn update_order(
        &self,
        id: OrderId,
        payload: &OrderPayload,
    ) -> Result<Order, ClientError> {
        let order = self.api.update_order(id, payload).await?;
        self.session.refresh().await?;
        Ok(order)
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Fails with a 403 or 404 status for orders the user cannot see.
    pub async fn delete_order(&self, id: OrderId) -> Result<Order, ClientError> {
        let order = self.api.delete_order(id).await?;
        self.session.refresh().await?;
        Ok(order)
    }

    async fn reconcile_jobs(&self) -> Result<(), ClientError> {
        self.jobs.fetch().await?;
        self.session.refresh().await.map(drop)
    }
}
