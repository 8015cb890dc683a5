use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{ListStore, StoreError};
use crate::models::List;

/// In-memory `ListStore`, used by the integration tests and selectable for
/// local development via `LINKBOARD_STORE=memory`. Mirrors the Postgres
/// store's whole-document save semantics.
#[derive(Clone, Default)]
pub struct MemoryListStore {
    lists: Arc<RwLock<HashMap<Uuid, List>>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn find(&self, id: Uuid) -> Result<Option<List>, StoreError> {
        Ok(self.lists.read().await.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<List>, StoreError> {
        let lists = self.lists.read().await;
        let mut owned: Vec<List> = lists.values().filter(|l| l.owner == owner).cloned().collect();
        owned.sort_by_key(|l| l.created_at);
        Ok(owned)
    }

    async fn insert(&self, list: &List) -> Result<(), StoreError> {
        self.lists.write().await.insert(list.id, list.clone());
        Ok(())
    }

    async fn save(&self, list: &List) -> Result<(), StoreError> {
        let mut lists = self.lists.write().await;
        if !lists.contains_key(&list.id) {
            return Err(StoreError::list_not_found(list.id));
        }
        let mut saved = list.clone();
        saved.updated_at = Utc::now();
        lists.insert(saved.id, saved);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if self.lists.write().await.remove(&id).is_none() {
            return Err(StoreError::list_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
