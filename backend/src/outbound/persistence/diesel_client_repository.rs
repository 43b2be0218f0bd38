//! PostgreSQL-backed `ClientRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{Client, ClientDraft, ClientId, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ClientRow, ClientValues, NewClientRow};
use super::pool::{DbPool, PoolError};
use super::schema::clients;

/// Diesel-backed client storage.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ClientRepositoryError {
    map_pool_error(error, ClientRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ClientRepositoryError {
    map_diesel_error(
        &error,
        ClientRepositoryError::query,
        ClientRepositoryError::connection,
    )
}

fn ids(ids: &[ClientId]) -> Vec<i32> {
    ids.iter().map(|id| id.get()).collect()
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = clients::table
            .filter(clients::user_id.eq(user_id.get()))
            .order(clients::id.asc())
            .select(ClientRow::as_select())
            .load::<ClientRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = clients::table
            .find(id.get())
            .select(ClientRow::as_select())
            .first::<ClientRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Client::from))
    }

    async fn find_many(&self, wanted: &[ClientId]) -> Result<Vec<Client>, ClientRepositoryError> {
        if wanted.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = clients::table
            .filter(clients::id.eq_any(ids(wanted)))
            .order(clients::id.asc())
            .select(ClientRow::as_select())
            .load::<ClientRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn create(
        &self,
        user_id: UserId,
        draft: &ClientDraft,
    ) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(clients::table)
            .values(&NewClientRow {
                user_id: user_id.get(),
                values: ClientValues::from(draft),
            })
            .returning(ClientRow::as_returning())
            .get_result::<ClientRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: ClientId,
        draft: &ClientDraft,
    ) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::update(clients::table.find(id.get()))
            .set(&ClientValues::from(draft))
            .returning(ClientRow::as_returning())
            .get_result::<ClientRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Client::from))
    }

    async fn delete(&self, id: ClientId) -> Result<bool, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(clients::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
