//! Port for order persistence.

use async_trait::async_trait;

use crate::domain::{ClientId, JobId, Order, OrderDraft, OrderId, UserId};

use super::define_repository_error;

define_repository_error!(
    /// Errors raised by order repository adapters.
    OrderRepositoryError,
    "order"
);

/// Storage for orders. All listings are ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders owned by `user_id`.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderRepositoryError>;

    /// Orders placed for `client_id`.
    async fn list_for_client(&self, client_id: ClientId)
    -> Result<Vec<Order>, OrderRepositoryError>;

    /// Orders for `job_id`, optionally restricted to one owner.
    async fn list_for_job(
        &self,
        job_id: JobId,
        owner: Option<UserId>,
    ) -> Result<Vec<Order>, OrderRepositoryError>;

    /// Fetch one order regardless of owner.
    async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError>;

    /// Insert an order owned by `user_id`.
    async fn create(&self, user_id: UserId, draft: &OrderDraft)
    -> Result<Order, OrderRepositoryError>;

    /// Replace the stored content. `None` when the order vanished.
    async fn update(
        &self,
        id: OrderId,
        draft: &OrderDraft,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    /// Remove one order. Returns whether a row was deleted.
    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError>;

    /// Remove all of `ids` in one transaction; either every row goes or none.
    async fn delete_many(&self, ids: &[OrderId]) -> Result<usize, OrderRepositoryError>;

    /// Whether any order references `client_id`.
    async fn has_orders_for_client(&self, client_id: ClientId)
    -> Result<bool, OrderRepositoryError>;
}
