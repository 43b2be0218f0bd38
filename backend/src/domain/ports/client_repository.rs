//! Port for client persistence.

use async_trait::async_trait;

use crate::domain::{Client, ClientDraft, ClientId, UserId};

use super::define_repository_error;

define_repository_error!(
    /// Errors raised by client repository adapters.
    ClientRepositoryError,
    "client"
);

/// Storage for clients. Every client belongs to exactly one user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Clients owned by `user_id`, ordered by id.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Client>, ClientRepositoryError>;

    /// Fetch one client regardless of owner.
    async fn find(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError>;

    /// Fetch several clients, ordered by id. Unknown ids are skipped.
    async fn find_many(&self, ids: &[ClientId]) -> Result<Vec<Client>, ClientRepositoryError>;

    /// Insert a client owned by `user_id`.
    async fn create(
        &self,
        user_id: UserId,
        draft: &ClientDraft,
    ) -> Result<Client, ClientRepositoryError>;

    /// Replace the stored content. `None` when the client vanished.
    async fn update(
        &self,
        id: ClientId,
        draft: &ClientDraft,
    ) -> Result<Option<Client>, ClientRepositoryError>;

    /// Remove a client. Returns whether a row was deleted.
    async fn delete(&self, id: ClientId) -> Result<bool, ClientRepositoryError>;
}
