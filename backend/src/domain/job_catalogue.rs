//! The shared job catalogue and per-user job removal.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ownership::{NO_DATA, distinct, existing_job};
use crate::domain::ports::{ClientRepository, JobRepository, JobsService, OrderRepository};
use crate::domain::{
    ClientSummary, Error, Job, JobFields, JobId, JobOrders, JobWithClients, OrderStatus,
    OrderWithClient, UserId,
};

/// Jobs service over the job, order and client repositories.
#[derive(Clone)]
pub struct JobCatalogue<J, O, C> {
    jobs: Arc<J>,
    orders: Arc<O>,
    clients: Arc<C>,
}

impl<J, O, C> JobCatalogue<J, O, C> {
    /// Create a new service with the given repositories.
    pub fn new(jobs: Arc<J>, orders: Arc<O>, clients: Arc<C>) -> Self {
        Self {
            jobs,
            orders,
            clients,
        }
    }
}

#[async_trait]
impl<J, O, C> JobsService for JobCatalogue<J, O, C>
where
    J: JobRepository,
    O: OrderRepository,
    C: ClientRepository,
{
    async fn list(&self) -> Result<Vec<Job>, Error> {
        Ok(self.jobs.list().await?)
    }

    async fn get(&self, job_id: JobId) -> Result<JobWithClients, Error> {
        let job = existing_job(self.jobs.as_ref(), job_id).await?;
        let orders = self.orders.list_for_job(job_id, None).await?;
        let client_ids = distinct(orders.iter().map(|order| order.client_id));
        let clients = self
            .clients
            .find_many(&client_ids)
            .await?
            .iter()
            .map(ClientSummary::from)
            .collect();
        Ok(JobWithClients { job, clients })
    }

    async fn create(&self, fields: JobFields) -> Result<Job, Error> {
        let draft = fields.into_draft()?;
        let job = self.jobs.create(&draft).await?;
        info!(job_id = %job.id, "created job");
        Ok(job)
    }

    async fn update(&self, job_id: JobId, fields: JobFields) -> Result<Job, Error> {
        let current = existing_job(self.jobs.as_ref(), job_id).await?;
        if fields == JobFields::default() {
            return Err(Error::invalid_request(NO_DATA));
        }
        let draft = fields.merge_over(&current)?;
        self.jobs
            .update(job_id, &draft)
            .await?
            .ok_or_else(|| Error::not_found("Job not found"))
    }

    async fn remove_for_user(&self, user_id: UserId, job_id: JobId) -> Result<Job, Error> {
        let job = existing_job(self.jobs.as_ref(), job_id).await?;
        let orders = self.orders.list_for_job(job_id, Some(user_id)).await?;
        if orders.is_empty() {
            return Err(Error::not_found("No orders found for this job"));
        }
        if orders
            .iter()
            .any(|order| order.status == OrderStatus::InProgress)
        {
            return Err(Error::invalid_request(
                "Cannot remove job with active orders!",
            ));
        }
        let ids: Vec<_> = orders.iter().map(|order| order.id).collect();
        let removed = self.orders.delete_many(&ids).await?;
        info!(%user_id, %job_id, removed, "removed job orders for user");
        Ok(job)
    }

    async fn orders(&self, user_id: UserId, job_id: JobId) -> Result<JobOrders, Error> {
        let job = existing_job(self.jobs.as_ref(), job_id).await?;
        let orders = self.orders.list_for_job(job_id, Some(user_id)).await?;
        let client_ids = distinct(orders.iter().map(|order| order.client_id));
        let clients: BTreeMap<_, _> = self
            .clients
            .find_many(&client_ids)
            .await?
            .into_iter()
            .map(|client| (client.id, client))
            .collect();
        let orders = orders
            .into_iter()
            .filter_map(|order| {
                let client = clients.get(&order.client_id)?.clone();
                Some(OrderWithClient { order, client })
            })
            .collect();
        Ok(JobOrders { job, orders })
    }
}

#[cfg(test)]
#[path = "job_catalogue_tests.rs"]
mod tests;
