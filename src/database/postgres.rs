use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use sqlx::FromRow;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use super::store::{ListStore, StoreError};
use crate::config;
use crate::models::{Item, List};

/// Postgres-backed `ListStore`.
///
/// Each list is one row; its items live in a jsonb column and are written
/// back wholesale on every save, which gives the whole-document semantics
/// the handlers rely on.
pub struct PgListStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct ListRow {
    id: Uuid,
    title: String,
    custom_url: String,
    owner: Uuid,
    items: Json<Vec<Item>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        List {
            id: row.id,
            title: row.title,
            custom_url: row.custom_url,
            owner: row.owner,
            items: row.items.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgListStore {
    /// Connect using `DATABASE_URL` and the configured pool settings
    pub async fn connect() -> Result<Self, StoreError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| StoreError::ConnectionError("DATABASE_URL is not set".to_string()))?;

        let db_config = &config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(db_config.connection_timeout_secs))
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        info!("connected to postgres list store");
        Ok(store)
    }

    /// Create the lists table if this is a fresh database
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lists (
                id          uuid PRIMARY KEY,
                title       text NOT NULL,
                custom_url  text NOT NULL,
                owner       uuid NOT NULL,
                items       jsonb NOT NULL DEFAULT '[]'::jsonb,
                created_at  timestamptz NOT NULL,
                updated_at  timestamptz NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn find(&self, id: Uuid) -> Result<Option<List>, StoreError> {
        let row = sqlx::query_as::<_, ListRow>(
            "SELECT id, title, custom_url, owner, items, created_at, updated_at \
             FROM lists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(List::from))
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<List>, StoreError> {
        let rows = sqlx::query_as::<_, ListRow>(
            "SELECT id, title, custom_url, owner, items, created_at, updated_at \
             FROM lists WHERE owner = $1 ORDER BY created_at",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(List::from).collect())
    }

    async fn insert(&self, list: &List) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO lists (id, title, custom_url, owner, items, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(list.id)
        .bind(&list.title)
        .bind(&list.custom_url)
        .bind(list.owner)
        .bind(Json(&list.items))
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, list: &List) -> Result<(), StoreError> {
        // Whole-document overwrite; the store's row-level write serialization
        // is the only concurrency control (last-write-wins).
        let result = sqlx::query(
            "UPDATE lists SET title = $2, custom_url = $3, items = $4, updated_at = now() \
             WHERE id = $1",
        )
        .bind(list.id)
        .bind(&list.title)
        .bind(&list.custom_url)
        .bind(Json(&list.items))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::list_not_found(list.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::list_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
