use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::pog::{Pog, PogFields};

/// Storage seam for the pog handlers. Carried in `AppState` as
/// `Arc<dyn PogRepository>` so tests can swap in an in-memory double.
///
/// Every method returns rows the way the driver hands them back: a sequence,
/// even when at most one row can match.
#[async_trait]
pub trait PogRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Pog>>;
    async fn find(&self, id: i32) -> Result<Vec<Pog>>;
    async fn create(&self, fields: &PogFields) -> Result<Vec<Pog>>;

    /// `None` when no row has `id`.
    async fn update(&self, id: i32, fields: &PogFields) -> Result<Option<Vec<Pog>>>;
    /// `None` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<Option<Vec<Pog>>>;
}

pub struct PgPogRepository {
    pool: PgPool,
}

impl PgPogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_BY_ID: &str = "SELECT * FROM pogs WHERE pogs_id = $1";

// Each method holds one pooled connection; dropping it at scope exit returns
// it to the pool on both the Ok and the `?` paths.
#[async_trait]
impl PogRepository for PgPogRepository {
    async fn list(&self) -> Result<Vec<Pog>> {
        let mut conn = self.pool.acquire().await?;
        Ok(
            sqlx::query_as::<_, Pog>("SELECT * FROM pogs ORDER BY pogs_id")
                .fetch_all(&mut *conn)
                .await?,
        )
    }

    async fn find(&self, id: i32) -> Result<Vec<Pog>> {
        let mut conn = self.pool.acquire().await?;
        Ok(sqlx::query_as::<_, Pog>(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?)
    }

    async fn create(&self, fields: &PogFields) -> Result<Vec<Pog>> {
        let mut conn = self.pool.acquire().await?;
        Ok(sqlx::query_as::<_, Pog>(
            r#"
            INSERT INTO pogs (pogs_name, ticker_symbol, price, color)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&fields.pogs_name)
        .bind(&fields.ticker_symbol)
        .bind(fields.price)
        .bind(&fields.color)
        .fetch_all(&mut *conn)
        .await?)
    }

    async fn update(&self, id: i32, fields: &PogFields) -> Result<Option<Vec<Pog>>> {
        let mut conn = self.pool.acquire().await?;

        // Lookup and write are separate statements; a concurrent delete in
        // between yields an empty RETURNING set.
        let existing = sqlx::query_as::<_, Pog>(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        if existing.is_empty() {
            return Ok(None);
        }

        let updated = sqlx::query_as::<_, Pog>(
            r#"
            UPDATE pogs
            SET pogs_name = $1, ticker_symbol = $2, price = $3, color = $4
            WHERE pogs_id = $5
            RETURNING *
            "#,
        )
        .bind(&fields.pogs_name)
        .bind(&fields.ticker_symbol)
        .bind(fields.price)
        .bind(&fields.color)
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<Vec<Pog>>> {
        let mut conn = self.pool.acquire().await?;

        let existing = sqlx::query_as::<_, Pog>(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        if existing.is_empty() {
            return Ok(None);
        }

        let deleted = sqlx::query_as::<_, Pog>("DELETE FROM pogs WHERE pogs_id = $1 RETURNING *")
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(deleted))
    }
}
