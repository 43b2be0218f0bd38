//! Typed HTTP access to every backend route.

use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    Client, ClientId, ClientOrders, ClientPayload, Credentials, DeletedClient, DeletedOrder, Job,
    JobId, JobOrders, JobPayload, JobWithClients, NewAccount, Order, OrderId, OrderPayload,
    RemovedJob, UserProfile,
};

/// Backend client sharing one cookie jar across calls.
///
/// Cloning is cheap and clones share the jar, so every clone acts as the
/// same signed-in user.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the TLS backend cannot be
    /// initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = HttpClient::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Connection settings in use.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create an account and start a session. Returns the new aggregate.
    ///
    /// # Errors
    ///
    /// Fails with a 400 [`ClientError::Status`] on invalid or taken details.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ClientError> {
        let body = NewAccount {
            username,
            email,
            password,
        };
        send_json(self.request(Method::POST, "register")?.json(&body)).await
    }

    /// Start a session. Returns the aggregate.
    ///
    /// # Errors
    ///
    /// Fails with a 401 [`ClientError::Status`] on bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let body = Credentials { username, password };
        send_json(self.request(Method::POST, "login")?.json(&body)).await
    }

    /// Fetch the aggregate for the current session. `None` when signed out.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and non-401 failures.
    pub async fn check_session(&self) -> Result<Option<UserProfile>, ClientError> {
        match send_json(self.request(Method::GET, "check_session")?).await {
            Ok(profile) => Ok(Some(profile)),
            Err(error) if error.is_unauthorized() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// End the session.
    ///
    /// # Errors
    ///
    /// Fails on transport errors.
    pub async fn logout(&self) -> Result<(), ClientError> {
        send_empty(self.request(Method::DELETE, "logout")?).await
    }

    /// The caller's clients.
    ///
    /// # Errors
    ///
    /// Fails with 401 without a session.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        send_json(self.request(Method::GET, "clients")?).await
    }

    /// Create a client owned by the caller.
    ///
    /// # Errors
    ///
    /// Fails with 400 and field errors on invalid input.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, ClientError> {
        self.send_with(Method::POST, "clients", payload).await
    }

    /// Update some fields of an owned client.
    ///
    /// # Errors
    ///
    /// Fails with 403 for another user's client, 404 for an unknown one.
    pub async fn update_client(
        &self,
        id: ClientId,
        payload: &ClientPayload,
    ) -> Result<Client, ClientError> {
        self.send_with(Method::PATCH, &format!("clients/{id}"), payload)
            .await
    }

    /// Delete an owned client without orders. Returns the deleted record.
    ///
    /// # Errors
    ///
    /// Fails with 400 while orders reference the client.
    pub async fn delete_client(&self, id: ClientId) -> Result<Client, ClientError> {
        let deleted: DeletedClient =
            send_json(self.request(Method::DELETE, &format!("clients/{id}"))?).await?;
        Ok(deleted.deleted_client)
    }

    /// An owned client with its orders and their jobs.
    ///
    /// # Errors
    ///
    /// Fails with 403 or 404 as for updates.
    pub async fn client_orders(&self, id: ClientId) -> Result<ClientOrders, ClientError> {
        send_json(self.request(Method::GET, &format!("clients/{id}/orders"))?).await
    }

    /// The whole job catalogue. Needs no session.
    ///
    /// # Errors
    ///
    /// Fails on transport errors.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        send_json(self.request(Method::GET, "jobs")?).await
    }

    /// One job with every client that ordered it. Needs no session.
    ///
    /// # Errors
    ///
    /// Fails with 404 for an unknown job.
    pub async fn get_job(&self, id: JobId) -> Result<JobWithClients, ClientError> {
        send_json(self.request(Method::GET, &format!("jobs/{id}"))?).await
    }

    /// Add a job to the catalogue.
    ///
    /// # Errors
    ///
    /// Fails with 400 and field errors on invalid input.
    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        self.send_with(Method::POST, "jobs", payload).await
    }

    /// Update some fields of a job.
    ///
    /// # Errors
    ///
    /// Fails with 404 for an unknown job.
    pub async fn update_job(&self, id: JobId, payload: &JobPayload) -> Result<Job, ClientError> {
        self.send_with(Method::PATCH, &format!("jobs/{id}"), payload)
            .await
    }

    /// Delete the caller's orders for a job. The job itself stays in the
    /// catalogue. Returns the job.
    ///
    /// # Errors
    ///
    /// Fails with 400 while one of those orders is in progress and 404 when
    /// the caller has none.
    pub async fn remove_job(&self, id: JobId) -> Result<Job, ClientError> {
        let removed: RemovedJob =
            send_json(self.request(Method::DELETE, &format!("jobs/{id}"))?).await?;
        Ok(removed.removed_job)
    }

    /// A job with the caller's orders for it.
    ///
    /// # Errors
    ///
    /// Fails with 404 for an unknown job.
    pub async fn job_orders(&self, id: JobId) -> Result<JobOrders, ClientError> {
        send_json(self.request(Method::GET, &format!("jobs/{id}/orders"))?).await
    }

    /// Create an order for an owned client.
    ///
    /// # Errors
    ///
    /// Fails with 400 and field errors on invalid input.
    pub async fn create_order(&self, payload: &OrderPayload) -> Result<Order, ClientError> {
        self.send_with(Method::POST, "orders", payload).await
    }

    /// Update some fields of an owned order.
    ///
    /// # Errors
    ///
    /// Fails with 400 when the merged order is invalid.
    pub async fn update_order(
        &self,
        id: OrderId,
        payload: &OrderPayload,
    ) -> Result<Order, ClientError> {
        self.send_with(Method::PATCH, &format!("orders/{id}"), payload)
            .await
    }

    /// Delete an owned order. Returns the deleted record.
    ///
    /// # Errors
    ///
    /// Fails with 403 or 404 as for updates.
    pub async fn delete_order(&self, id: OrderId) -> Result<Order, ClientError> {
        let deleted: DeletedOrder =
            send_json(self.request(Method::DELETE, &format!("orders/{id}"))?).await?;
        Ok(deleted.deleted_order)
    }

    fn request(&self, method: Method, route: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.config.endpoint(route)?;
        Ok(self.http.request(method, url))
    }

    async fn send_with<B, T>(&self, method: Method, route: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        send_json(self.request(method, route)?.json(body)).await
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let bytes = send(request).await?;
    serde_json::from_slice(&bytes).map_err(|error| ClientError::Decode {
        message: error.to_string(),
    })
}

async fn send_empty(request: RequestBuilder) -> Result<(), ClientError> {
    send(request).await.map(drop)
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    debug!(%status, bytes = body.len(), "backend responded");
    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(ClientError::from_status(status, &body))
    }
}
