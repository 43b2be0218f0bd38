//! Read models assembled from several repositories.
//!
//! [`UserProfile`] is the aggregate the client keeps in memory: the account
//! plus every client, order and ordered job of that user, nested so views can
//! be derived without further calls.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Client, ClientId, Job, JobId, Order, User, UserId};

/// Minimal client reference nested under jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientSummary {
    /// Client identifier.
    pub id: ClientId,
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
        }
    }
}

/// Job plus the distinct clients that ordered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobWithClients {
    /// The job record.
    #[serde(flatten)]
    pub job: Job,
    /// Clients ordered by id.
    pub clients: Vec<ClientSummary>,
}

/// Client plus the distinct jobs ordered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientWithJobs {
    /// The client record.
    #[serde(flatten)]
    pub client: Client,
    /// Jobs ordered by id.
    pub jobs: Vec<Job>,
}

/// Order with both referenced records embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetails {
    /// The order record.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced client.
    pub client: Client,
    /// Referenced job.
    pub job: Job,
}

/// Order with its job embedded, listed under a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderWithJob {
    /// The order record.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced job.
    pub job: Job,
}

/// Order with its client embedded, listed under a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderWithClient {
    /// The order record.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced client.
    pub client: Client,
}

/// Orders of one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientOrders {
    /// The client.
    pub client: Client,
    /// Orders ordered by id.
    pub orders: Vec<OrderWithJob>,
}

/// A caller's orders for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobOrders {
    /// The job.
    pub job: Job,
    /// Orders ordered by id.
    pub orders: Vec<OrderWithClient>,
}

/// Full user aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Account identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Distinct jobs with at least one order, by job id.
    pub jobs: Vec<JobWithClients>,
    /// Every owned client, by id.
    pub clients: Vec<ClientWithJobs>,
    /// Every owned order, by id.
    pub orders: Vec<OrderDetails>,
}

impl UserProfile {
    /// Nest `clients`, `orders` and the referenced `jobs` under `user`.
    ///
    /// Orders whose client or job is not among the inputs are left out.
    #[must_use]
    pub fn assemble(user: User, clients: Vec<Client>, orders: Vec<Order>, jobs: Vec<Job>) -> Self {
        let clients: BTreeMap<ClientId, Client> =
            clients.into_iter().map(|client| (client.id, client)).collect();
        let jobs: BTreeMap<JobId, Job> = jobs.into_iter().map(|job| (job.id, job)).collect();
        let mut orders: Vec<Order> = orders
            .into_iter()
            .filter(|order| clients.contains_key(&order.client_id) && jobs.contains_key(&order.job_id))
            .collect();
        orders.sort_by_key(|order| order.id);

        let mut clients_by_job: BTreeMap<JobId, BTreeSet<ClientId>> = BTreeMap::new();
        let mut jobs_by_client: BTreeMap<ClientId, BTreeSet<JobId>> = BTreeMap::new();
        for order in &orders {
            clients_by_job
                .entry(order.job_id)
                .or_default()
                .insert(order.client_id);
            jobs_by_client
                .entry(order.client_id)
                .or_default()
                .insert(order.job_id);
        }

        let profile_jobs = clients_by_job
            .iter()
            .filter_map(|(job_id, client_ids)| {
                jobs.get(job_id).map(|job| JobWithClients {
                    job: job.clone(),
                    clients: client_ids
                        .iter()
                        .filter_map(|id| clients.get(id).map(ClientSummary::from))
                        .collect(),
                })
            })
            .collect();

        let profile_clients = clients
            .values()
            .map(|client| ClientWithJobs {
                client: client.clone(),
                jobs: jobs_by_client
                    .get(&client.id)
                    .map(|ids| ids.iter().filter_map(|id| jobs.get(id).cloned()).collect())
                    .unwrap_or_default(),
            })
            .collect();

        let profile_orders = orders
            .into_iter()
            .filter_map(|order| {
                let client = clients.get(&order.client_id)?.clone();
                let job = jobs.get(&order.job_id)?.clone();
                Some(OrderDetails { order, client, job })
            })
            .collect();

        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            jobs: profile_jobs,
            clients: profile_clients,
            orders: profile_orders,
        }
    }
}
