//! PostgreSQL-backed `OrderRepository` adapter.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::warn;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{ClientId, JobId, Order, OrderDraft, OrderId, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewOrderRow, OrderRow, OrderValues};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed order storage.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> OrderRepositoryError {
    map_pool_error(error, OrderRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_diesel_error(
        &error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

fn into_order(row: OrderRow) -> Result<Order, OrderRepositoryError> {
    let id = row.id;
    Order::try_from(row).map_err(|error| {
        warn!(order_id = id, %error, "stored order has an unknown status");
        OrderRepositoryError::query(error.to_string())
    })
}

fn into_orders(rows: Vec<OrderRow>) -> Result<Vec<Order>, OrderRepositoryError> {
    rows.into_iter().map(into_order).collect()
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = orders::table
            .filter(orders::user_id.eq(user_id.get()))
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load::<OrderRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        into_orders(rows)
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = orders::table
            .filter(orders::client_id.eq(client_id.get()))
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load::<OrderRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        into_orders(rows)
    }

    async fn list_for_job(
        &self,
        job_id: JobId,
        owner: Option<UserId>,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let mut query = orders::table
            .filter(orders::job_id.eq(job_id.get()))
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .into_boxed();
        if let Some(user_id) = owner {
            query = query.filter(orders::user_id.eq(user_id.get()));
        }
        let rows = query
            .load::<OrderRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        into_orders(rows)
    }

    async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = orders::table
            .find(id.get())
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(into_order).transpose()
    }

    async fn create(
        &self,
        user_id: UserId,
        draft: &OrderDraft,
    ) -> Result<Order, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(orders::table)
            .values(&NewOrderRow {
                user_id: user_id.get(),
                values: OrderValues::from(draft),
            })
            .returning(OrderRow::as_returning())
            .get_result::<OrderRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        into_order(row)
    }

    async fn update(
        &self,
        id: OrderId,
        draft: &OrderDraft,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::update(orders::table.find(id.get()))
            .set(&OrderValues::from(draft))
            .returning(OrderRow::as_returning())
            .get_result::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(into_order).transpose()
    }

    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(orders::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }

    async fn delete_many(&self, ids: &[OrderId]) -> Result<usize, OrderRepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let raw: Vec<i32> = ids.iter().map(|id| id.get()).collect();
        let expected = raw.len();
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        conn.transaction(|conn| {
            async move {
                let deleted = diesel::delete(orders::table.filter(orders::id.eq_any(raw)))
                    .execute(conn)
                    .await?;
                if deleted == expected {
                    Ok(deleted)
                } else {
                    Err(diesel::result::Error::RollbackTransaction)
                }
            }
            .scope_boxed()
        })
        .await
        .map_err(|error| match error {
            diesel::result::Error::RollbackTransaction => OrderRepositoryError::query(format!(
                "expected to delete {expected} orders; rolled back"
            )),
            other => diesel_error(other),
        })
    }

    async fn has_orders_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<bool, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::select(exists(
            orders::table.filter(orders::client_id.eq(client_id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(diesel_error)
    }
}
