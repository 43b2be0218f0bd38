//! Client management on behalf of the signed-in user.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ownership::{NO_DATA, distinct, owned_client};
use crate::domain::ports::{ClientRepository, ClientsService, JobRepository, OrderRepository};
use crate::domain::{
    Client, ClientFields, ClientId, ClientOrders, Error, OrderWithJob, UserId,
};

/// Clients service over the client, order and job repositories.
#[derive(Clone)]
pub struct ClientBook<C, O, J> {
    clients: Arc<C>,
    orders: Arc<O>,
    jobs: Arc<J>,
}

impl<C, O, J> ClientBook<C, O, J> {
    /// Create a new service with the given repositories.
    pub fn new(clients: Arc<C>, orders: Arc<O>, jobs: Arc<J>) -> Self {
        Self {
            clients,
            orders,
            jobs,
        }
    }
}

#[async_trait]
impl<C, O, J> ClientsService for ClientBook<C, O, J>
where
    C: ClientRepository,
    O: OrderRepository,
    J: JobRepository,
{
    async fn list(&self, user_id: UserId) -> Result<Vec<Client>, Error> {
        Ok(self.clients.list_for_user(user_id).await?)
    }

    async fn create(&self, user_id: UserId, fields: ClientFields) -> Result<Client, Error> {
        let draft = fields.into_draft()?;
        let client = self.clients.create(user_id, &draft).await?;
        info!(%user_id, client_id = %client.id, "created client");
        Ok(client)
    }

    async fn update(
        &self,
        user_id: UserId,
        client_id: ClientId,
        fields: ClientFields,
    ) -> Result<Client, Error> {
        let current = owned_client(self.clients.as_ref(), user_id, client_id).await?;
        if fields == ClientFields::default() {
            return Err(Error::invalid_request(NO_DATA));
        }
        let draft = fields.merge_over(&current)?;
        self.clients
            .update(client_id, &draft)
            .await?
            .ok_or_else(|| Error::not_found("Client not found"))
    }

    async fn delete(&self, user_id: UserId, client_id: ClientId) -> Result<Client, Error> {
        let client = owned_client(self.clients.as_ref(), user_id, client_id).await?;
        if self.orders.has_orders_for_client(client_id).await? {
            return Err(Error::invalid_request(
                "Cannot delete client with existing order!",
            ));
        }
        if !self.clients.delete(client_id).await? {
            return Err(Error::not_found("Client not found"));
        }
        info!(%user_id, %client_id, "deleted client");
        Ok(client)
    }

    async fn orders(&self, user_id: UserId, client_id: ClientId) -> Result<ClientOrders, Error> {
        let client = owned_client(self.clients.as_ref(), user_id, client_id).await?;
        let orders = self.orders.list_for_client(client_id).await?;
        let job_ids = distinct(orders.iter().map(|order| order.job_id));
        let jobs: BTreeMap<_, _> = self
            .jobs
            .find_many(&job_ids)
            .await?
            .into_iter()
            .map(|job| (job.id, job))
            .collect();
        let orders = orders
            .into_iter()
            .filter_map(|order| {
                let job = jobs.get(&order.job_id)?.clone();
                Some(OrderWithJob { order, job })
            })
            .collect();
        Ok(ClientOrders { client, orders })
    }
}

#[cfg(test)]
#[path = "client_book_tests.rs"]
mod tests;
