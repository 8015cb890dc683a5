use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::List;

/// Errors surfaced by a `ListStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl StoreError {
    pub fn list_not_found(id: Uuid) -> Self {
        StoreError::NotFound(format!("List {} not found", id))
    }
}

/// Persistence seam for `List` documents.
///
/// Lists are saved whole: `save` overwrites the stored document, items
/// included, so concurrent writers to the same list are last-write-wins at
/// document granularity.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Fetch a list by id, `None` if absent
    async fn find(&self, id: Uuid) -> Result<Option<List>, StoreError>;

    /// All lists owned by `owner`, oldest first
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<List>, StoreError>;

    /// Persist a brand-new list
    async fn insert(&self, list: &List) -> Result<(), StoreError>;

    /// Overwrite the stored document with `list`, bumping its update time.
    /// Fails `NotFound` if the list no longer exists.
    async fn save(&self, list: &List) -> Result<(), StoreError>;

    /// Delete a list and, with it, all embedded items
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Connectivity probe for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Fetch a list or fail with a clean `NotFound`
pub async fn find_404(store: &dyn ListStore, id: Uuid) -> Result<List, StoreError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| StoreError::list_not_found(id))
}
