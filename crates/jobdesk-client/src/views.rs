//! Listings derived from a profile snapshot.
//!
//! Nothing here calls the backend. Order listings are sorted by start date,
//! then by id, so the soonest work comes first.

use crate::model::{
    ClientId, ClientSummary, ClientWithJobs, JobId, JobWithClients, OrderDetails, OrderId,
    OrderStatus, UserProfile,
};

fn by_start_date(mut orders: Vec<&OrderDetails>) -> Vec<&OrderDetails> {
    orders.sort_by_key(|details| (details.order.start_date, details.order.id));
    orders
}

/// Orders placed for `client`.
#[must_use]
pub fn orders_for_client(profile: &UserProfile, client: ClientId) -> Vec<&OrderDetails> {
    by_start_date(
        profile
            .orders
            .iter()
            .filter(|details| details.order.client_id == client)
            .collect(),
    )
}

/// Orders placed for `job`.
#[must_use]
pub fn orders_for_job(profile: &UserProfile, job: JobId) -> Vec<&OrderDetails> {
    by_start_date(
        profile
            .orders
            .iter()
            .filter(|details| details.order.job_id == job)
            .collect(),
    )
}

/// Orders currently in `status`.
///
/// # Examples
/// ```
/// use jobdesk_client::{OrderStatus, UserId, UserProfile};
/// use jobdesk_client::views::orders_by_status;
///
/// let profile = UserProfile {
///     id: UserId::new(1),
///     username: "ada".into(),
///     email: "ada@example.com".into(),
///     jobs: vec![],
///     clients: vec![],
///     orders: vec![],
/// };
/// assert!(orders_by_status(&profile, OrderStatus::Pending).is_empty());
/// ```
#[must_use]
pub fn orders_by_status(profile: &UserProfile, status: OrderStatus) -> Vec<&OrderDetails> {
    by_start_date(
        profile
            .orders
            .iter()
            .filter(|details| details.order.status == status)
            .collect(),
    )
}

/// Distinct clients that ordered `job`; empty when the user never did.
#[must_use]
pub fn clients_for_job(profile: &UserProfile, job: JobId) -> &[ClientSummary] {
    find_job(profile, job).map_or(&[], |entry| entry.clients.as_slice())
}

/// Owned client by id.
#[must_use]
pub fn find_client(profile: &UserProfile, id: ClientId) -> Option<&ClientWithJobs> {
    profile.clients.iter().find(|entry| entry.client.id == id)
}

/// Ordered job by id.
#[must_use]
pub fn find_job(profile: &UserProfile, id: JobId) -> Option<&JobWithClients> {
    profile.jobs.iter().find(|entry| entry.job.id == id)
}

/// Owned order by id.
#[must_use]
pub fn find_order(profile: &UserProfile, id: OrderId) -> Option<&OrderDetails> {
    profile.orders.iter().find(|details| details.order.id == id)
}
