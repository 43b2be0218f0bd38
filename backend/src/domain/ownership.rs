//! Lookups that enforce the caller owns the record.

use crate::domain::ports::{ClientRepository, JobRepository, OrderRepository};
use crate::domain::{Client, ClientId, Error, Job, JobId, Order, OrderId, UserId};

/// Message for PATCH requests that carry no fields.
pub(crate) const NO_DATA: &str = "No data provided";

pub(crate) async fn owned_client<C>(
    clients: &C,
    user_id: UserId,
    client_id: ClientId,
) -> Result<Client, Error>
where
    C: ClientRepository + ?Sized,
{
    let client = clients
        .find(client_id)
        .await?
        .ok_or_else(|| Error::not_found("Client not found"))?;
    if client.user_id == user_id {
        Ok(client)
    } else {
        Err(Error::forbidden("Unauthorized access to client"))
    }
}

pub(crate) async fn owned_order<O>(
    orders: &O,
    user_id: UserId,
    order_id: OrderId,
) -> Result<Order, Error>
where
    O: OrderRepository + ?Sized,
{
    let order = orders
        .find(order_id)
        .await?
        .ok_or_else(|| Error::not_found("Order not found"))?;
    if order.user_id == user_id {
        Ok(order)
    } else {
        Err(Error::forbidden("Unauthorized access to order"))
    }
}

pub(crate) async fn existing_job<J>(jobs: &J, job_id: JobId) -> Result<Job, Error>
where
    J: JobRepository + ?Sized,
{
    jobs.find(job_id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))
}

/// Sorted, de-duplicated identifiers.
pub(crate) fn distinct<T: Ord + Copy>(ids: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut ids: Vec<T> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
