//! Builds the [`UserProfile`] aggregate from the repositories.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ClientRepository, JobRepository, OrderRepository, ProfileQuery, UserRepository,
};
use crate::domain::{Error, JobId, UserId, UserProfile};

/// Profile query over the four repositories.
#[derive(Clone)]
pub struct ProfileAssembler<U, C, J, O> {
    users: Arc<U>,
    clients: Arc<C>,
    jobs: Arc<J>,
    orders: Arc<O>,
}

impl<U, C, J, O> ProfileAssembler<U, C, J, O> {
    /// Create a new query with the given repositories.
    pub fn new(users: Arc<U>, clients: Arc<C>, jobs: Arc<J>, orders: Arc<O>) -> Self {
        Self {
            users,
            clients,
            jobs,
            orders,
        }
    }
}

#[async_trait]
impl<U, C, J, O> ProfileQuery for ProfileAssembler<U, C, J, O>
where
    U: UserRepository,
    C: ClientRepository,
    J: JobRepository,
    O: OrderRepository,
{
    async fn profile(&self, user_id: UserId) -> Result<UserProfile, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(Error::not_authenticated)?;
        let clients = self.clients.list_for_user(user_id).await?;
        let orders = self.orders.list_for_user(user_id).await?;
        let job_ids: Vec<JobId> = orders
            .iter()
            .map(|order| order.job_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let jobs = self.jobs.find_many(&job_ids).await?;
        Ok(UserProfile::assemble(user, clients, orders, jobs))
    }
}

#[cfg(test)]
mod tests {
    //! Aggregate loading.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockClientRepository, MockJobRepository, MockOrderRepository, MockUserRepository,
    };

    #[tokio::test]
    async fn missing_user_is_not_authenticated() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(None));
        let query = ProfileAssembler::new(
            Arc::new(users),
            Arc::new(MockClientRepository::new()),
            Arc::new(MockJobRepository::new()),
            Arc::new(MockOrderRepository::new()),
        );

        let error = query.profile(UserId::new(9)).await.expect_err("stale session");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
        assert_eq!(error.message(), "Not authenticated");
    }

    #[tokio::test]
    async fn user_without_records_gets_empty_collections() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|id| {
            Ok(Some(crate::domain::User {
                id,
                username: "ada".to_owned(),
                email: "ada@example.com".to_owned(),
            }))
        });
        let mut clients = MockClientRepository::new();
        clients.expect_list_for_user().return_once(|_| Ok(Vec::new()));
        let mut orders = MockOrderRepository::new();
        orders.expect_list_for_user().return_once(|_| Ok(Vec::new()));
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_many()
            .withf(|ids| ids.is_empty())
            .return_once(|_| Ok(Vec::new()));

        let profile = ProfileAssembler::new(
            Arc::new(users),
            Arc::new(clients),
            Arc::new(jobs),
            Arc::new(orders),
        )
        .profile(UserId::new(1))
        .await
        .expect("profile loads");
        assert_eq!(profile.username, "ada");
        assert!(profile.jobs.is_empty() && profile.clients.is_empty() && profile.orders.is_empty());
    }
}
