//! Order management on behalf of the signed-in user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ownership::{NO_DATA, existing_job, owned_client, owned_order};
use crate::domain::ports::{ClientRepository, JobRepository, OrderRepository, OrdersService};
use crate::domain::{Error, Order, OrderFields, OrderId, UserId};

/// Orders service over the order, client and job repositories.
#[derive(Clone)]
pub struct OrderBook<O, C, J> {
    orders: Arc<O>,
    clients: Arc<C>,
    jobs: Arc<J>,
}

impl<O, C, J> OrderBook<O, C, J> {
    /// Create a new service with the given repositories.
    pub fn new(orders: Arc<O>, clients: Arc<C>, jobs: Arc<J>) -> Self {
        Self {
            orders,
            clients,
            jobs,
        }
    }
}

#[async_trait]
impl<O, C, J> OrdersService for OrderBook<O, C, J>
where
    O: OrderRepository,
    C: ClientRepository,
    J: JobRepository,
{
    async fn create(&self, user_id: UserId, fields: OrderFields) -> Result<Order, Error> {
        let draft = fields.into_draft()?;
        owned_client(self.clients.as_ref(), user_id, draft.client_id).await?;
        existing_job(self.jobs.as_ref(), draft.job_id).await?;
        let order = self.orders.create(user_id, &draft).await?;
        info!(%user_id, order_id = %order.id, "created order");
        Ok(order)
    }

    async fn update(
        &self,
        user_id: UserId,
        order_id: OrderId,
        fields: OrderFields,
    ) -> Result<Order, Error> {
        let current = owned_order(self.orders.as_ref(), user_id, order_id).await?;
        if fields == OrderFields::default() {
            return Err(Error::invalid_request(NO_DATA));
        }
        let draft = fields.merge_over(&current)?;
        if draft.client_id != current.client_id {
            owned_client(self.clients.as_ref(), user_id, draft.client_id).await?;
        }
        if draft.job_id != current.job_id {
            existing_job(self.jobs.as_ref(), draft.job_id).await?;
        }
        self.orders
            .update(order_id, &draft)
            .await?
            .ok_or_else(|| Error::not_found("Order not found"))
    }

    async fn delete(&self, user_id: UserId, order_id: OrderId) -> Result<Order, Error> {
        let order = owned_order(self.orders.as_ref(), user_id, order_id).await?;
        if !self.orders.delete(order_id).await? {
            return Err(Error::not_found("Order not found"));
        }
        info!(%user_id, %order_id, "deleted order");
        Ok(order)
    }
}

#[cfg(test)]
#[path = "order_book_tests.rs"]
mod tests;
