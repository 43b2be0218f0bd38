//! Driving port for order management.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderFields, OrderId, UserId};

/// Order use-cases. Every call acts on behalf of `user_id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate and store a new order for one of the caller's clients.
    async fn create(&self, user_id: UserId, fields: OrderFields) -> Result<Order, Error>;

    /// Merge `fields` over the stored order and store the result.
    async fn update(
        &self,
        user_id: UserId,
        order_id: OrderId,
        fields: OrderFields,
    ) -> Result<Order, Error>;

    /// Delete an order, returning the removed record.
    async fn delete(&self, user_id: UserId, order_id: OrderId) -> Result<Order, Error>;
}
