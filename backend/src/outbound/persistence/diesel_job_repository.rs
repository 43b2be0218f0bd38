//! PostgreSQL-backed `JobRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JobRepository, JobRepositoryError};
use crate::domain::{Job, JobDraft, JobId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{JobRow, JobValues};
use super::pool::{DbPool, PoolError};
use super::schema::jobs;

/// Diesel-backed job catalogue.
#[derive(Clone)]
pub struct DieselJobRepository {
    pool: DbPool,
}

impl DieselJobRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> JobRepositoryError {
    map_pool_error(error, JobRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> JobRepositoryError {
    map_diesel_error(
        &error,
        JobRepositoryError::query,
        JobRepositoryError::connection,
    )
}

#[async_trait]
impl JobRepository for DieselJobRepository {
    async fn list(&self) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = jobs::table
            .order(jobs::id.asc())
            .select(JobRow::as_select())
            .load::<JobRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn find(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = jobs::table
            .find(id.get())
            .select(JobRow::as_select())
            .first::<JobRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Job::from))
    }

    async fn find_many(&self, ids: &[JobId]) -> Result<Vec<Job>, JobRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i32> = ids.iter().map(|id| id.get()).collect();
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = jobs::table
            .filter(jobs::id.eq_any(raw))
            .order(jobs::id.asc())
            .select(JobRow::as_select())
            .load::<JobRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn create(&self, draft: &JobDraft) -> Result<Job, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(jobs::table)
            .values(&JobValues::from(draft))
            .returning(JobRow::as_returning())
            .get_result::<JobRow>(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(row.into())
    }

    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<Option<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::update(jobs::table.find(id.get()))
            .set(&JobValues::from(draft))
            .returning(JobRow::as_returning())
            .get_result::<JobRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Job::from))
    }
}
