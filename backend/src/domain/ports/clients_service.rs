//! Driving port for client management.

use async_trait::async_trait;

use crate::domain::{Client, ClientFields, ClientId, ClientOrders, Error, UserId};

/// Client use-cases. Every call acts on behalf of `user_id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Clients owned by the caller.
    async fn list(&self, user_id: UserId) -> Result<Vec<Client>, Error>;

    /// Validate and store a new client.
    async fn create(&self, user_id: UserId, fields: ClientFields) -> Result<Client, Error>;

    /// Merge `fields` over the stored client and store the result.
    async fn update(
        &self,
        user_id: UserId,
        client_id: ClientId,
        fields: ClientFields,
    ) -> Result<Client, Error>;

    /// Delete a client that has no orders, returning the removed record.
    async fn delete(&self, user_id: UserId, client_id: ClientId) -> Result<Client, Error>;

    /// The client with its orders and their jobs.
    async fn orders(&self, user_id: UserId, client_id: ClientId) -> Result<ClientOrders, Error>;
}
