//! In-memory adapter implementing every repository port.
//!
//! Used when no database is configured and by integration tests. One
//! [`InMemoryStore`] holds all four tables behind a single lock so
//! multi-row operations are atomic, and enforces the same uniqueness and
//! reference rules as the SQL schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    ClientRepository, ClientRepositoryError, JobRepository, JobRepositoryError, OrderRepository,
    OrderRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Client, ClientDraft, ClientId, Job, JobDraft, JobId, NewUser, Order, OrderDraft, OrderId,
    User, UserCredentials, UserId,
};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, StoredUser>,
    clients: BTreeMap<ClientId, Client>,
    jobs: BTreeMap<JobId, Job>,
    orders: BTreeMap<OrderId, Order>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// Shared in-memory tables. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|s| s.user.email == user.email) {
            return Err(UserPersistenceError::duplicate("email"));
        }
        if tables.users.values().any(|s| s.user.username == user.username) {
            return Err(UserPersistenceError::duplicate("username"));
        }
        let id = UserId::new(tables.next_id());
        let stored = User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
        };
        tables.users.insert(
            id,
            StoredUser {
                user: stored.clone(),
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).map(|s| s.user.clone()))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|s| s.user.username == username)
            .map(|s| UserCredentials {
                id: s.user.id,
                password_hash: s.password_hash.clone(),
            }))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|s| s.user.username == username))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|s| s.user.email == email))
    }
}

#[async_trait]
impl ClientRepository for InMemoryStore {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Client>, ClientRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .clients
            .values()
            .filter(|client| client.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        Ok(self.tables.read().await.clients.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[ClientId]) -> Result<Vec<Client>, ClientRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .clients
            .values()
            .filter(|client| ids.contains(&client.id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        user_id: UserId,
        draft: &ClientDraft,
    ) -> Result<Client, ClientRepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(ClientRepositoryError::query("owner does not exist"));
        }
        let id = ClientId::new(tables.next_id());
        let client = Client::from_draft(id, user_id, draft.clone());
        tables.clients.insert(id, client.clone());
        Ok(client)
    }

    async fn update(
        &self,
        id: ClientId,
        draft: &ClientDraft,
    ) -> Result<Option<Client>, ClientRepositoryError> {
        let mut tables = self.tables.write().await;
        Ok(tables.clients.get_mut(&id).map(|client| {
            *client = Client::from_draft(id, client.user_id, draft.clone());
            client.clone()
        }))
    }

    async fn delete(&self, id: ClientId) -> Result<bool, ClientRepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.orders.values().any(|order| order.client_id == id) {
            return Err(ClientRepositoryError::query("client is still referenced by orders"));
        }
        Ok(tables.clients.remove(&id).is_some())
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Job>, JobRepositoryError> {
        Ok(self.tables.read().await.jobs.values().cloned().collect())
    }

    async fn find(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError> {
        Ok(self.tables.read().await.jobs.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[JobId]) -> Result<Vec<Job>, JobRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .jobs
            .values()
            .filter(|job| ids.contains(&job.id))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &JobDraft) -> Result<Job, JobRepositoryError> {
        let mut tables = self.tables.write().await;
        let id = JobId::new(tables.next_id());
        let job = Job::from_draft(id, draft.clone());
        tables.jobs.insert(id, job.clone());
        Ok(job)
    }

    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<Option<Job>, JobRepositoryError> {
        let mut tables = self.tables.write().await;
        Ok(tables.jobs.get_mut(&id).map(|job| {
            *job = Job::from_draft(id, draft.clone());
            job.clone()
        }))
    }
}

fn check_references(tables: &Tables, draft: &OrderDraft) -> Result<(), OrderRepositoryError> {
    if !tables.clients.contains_key(&draft.client_id) {
        return Err(OrderRepositoryError::query("referenced client does not exist"));
    }
    if !tables.jobs.contains_key(&draft.job_id) {
        return Err(OrderRepositoryError::query("referenced job does not exist"));
    }
    Ok(())
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .orders
            .values()
            .filter(|order| order.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn list_for_job(
        &self,
        job_id: JobId,
        owner: Option<UserId>,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .orders
            .values()
            .filter(|order| order.job_id == job_id)
            .filter(|order| owner.is_none_or(|user_id| order.user_id == user_id))
            .cloned()
            .collect())
    }

    async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        Ok(self.tables.read().await.orders.get(&id).cloned())
    }

    async fn create(
        &self,
        user_id: UserId,
        draft: &OrderDraft,
    ) -> Result<Order, OrderRepositoryError> {
        let mut tables = self.tables.write().await;
        check_references(&tables, draft)?;
        let id = OrderId::new(tables.next_id());
        let order = Order::from_draft(id, user_id, draft.clone());
        tables.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn update(
        &self,
        id: OrderId,
        draft: &OrderDraft,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let mut tables = self.tables.write().await;
        check_references(&tables, draft)?;
        Ok(tables.orders.get_mut(&id).map(|order| {
            *order = Order::from_draft(id, order.user_id, draft.clone());
            order.clone()
        }))
    }

    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError> {
        Ok(self.tables.write().await.orders.remove(&id).is_some())
    }

    async fn delete_many(&self, ids: &[OrderId]) -> Result<usize, OrderRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(missing) = ids.iter().find(|id| !tables.orders.contains_key(id)) {
            return Err(OrderRepositoryError::query(format!(
                "order {missing} vanished; nothing deleted"
            )));
        }
        for id in ids {
            tables.orders.remove(id);
        }
        Ok(ids.len())
    }

    async fn has_orders_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<bool, OrderRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.orders.values().any(|order| order.client_id == client_id))
    }
}
