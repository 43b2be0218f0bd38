//! Builders wiring repositories into the HTTP state ports.

use std::sync::Arc;

use crate::domain::ports::{
    ClientRepository, JobRepository, OrderRepository, PasswordHasher, UserRepository,
};
use crate::domain::{AccountDirectory, ClientBook, JobCatalogue, OrderBook, ProfileAssembler};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::persistence::{
    DbPool, DieselClientRepository, DieselJobRepository, DieselOrderRepository,
    DieselUserRepository,
};
use crate::outbound::security::Argon2Hasher;

/// The four driven repositories behind the HTTP state.
pub struct Repositories<U, C, J, O> {
    pub users: Arc<U>,
    pub clients: Arc<C>,
    pub jobs: Arc<J>,
    pub orders: Arc<O>,
}

/// Assemble every driving port from one set of repositories.
pub fn build_http_state<U, C, J, O, H>(repos: Repositories<U, C, J, O>, hasher: Arc<H>) -> HttpState
where
    U: UserRepository + 'static,
    C: ClientRepository + 'static,
    J: JobRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let Repositories {
        users,
        clients,
        jobs,
        orders,
    } = repos;
    HttpState {
        accounts: Arc::new(AccountDirectory::new(users.clone(), hasher)),
        profiles: Arc::new(ProfileAssembler::new(
            users,
            clients.clone(),
            jobs.clone(),
            orders.clone(),
        )),
        clients: Arc::new(ClientBook::new(clients.clone(), orders.clone(), jobs.clone())),
        jobs: Arc::new(JobCatalogue::new(jobs.clone(), orders.clone(), clients.clone())),
        orders: Arc::new(OrderBook::new(orders, clients, jobs)),
    }
}

/// HTTP state over PostgreSQL repositories sharing `pool`.
#[must_use]
pub fn diesel_http_state(pool: &DbPool, hasher: Argon2Hasher) -> HttpState {
    build_http_state(
        Repositories {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            clients: Arc::new(DieselClientRepository::new(pool.clone())),
            jobs: Arc::new(DieselJobRepository::new(pool.clone())),
            orders: Arc::new(DieselOrderRepository::new(pool.clone())),
        },
        Arc::new(hasher),
    )
}

/// HTTP state over a process-local store.
#[must_use]
pub fn in_memory_http_state(store: InMemoryStore, hasher: Argon2Hasher) -> HttpState {
    let store = Arc::new(store);
    build_http_state(
        Repositories {
            users: store.clone(),
            clients: store.clone(),
            jobs: store.clone(),
            orders: store,
        },
        Arc::new(hasher),
    )
}

/// Pick the adapters for the configured pool.
#[must_use]
pub fn http_state_for(pool: Option<&DbPool>, hasher: Argon2Hasher) -> HttpState {
    match pool {
        Some(pool) => diesel_http_state(pool, hasher),
        None => in_memory_http_state(InMemoryStore::new(), hasher),
    }
}
