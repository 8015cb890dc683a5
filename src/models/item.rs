use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ApiError;

/// A bookmark-like link, embedded in exactly one parent `List`.
///
/// Items never exist on their own: they are persisted as part of the parent
/// document and their lifetime is bounded by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating an item.
///
/// Deliberately carries no `owner` or `id` field: the owner is always the
/// authenticated requester and the id is generated server-side. Unknown
/// fields in the request body (including a client-supplied `owner`) are
/// dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ItemDraft {
    /// Validate required fields, collecting per-field messages
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.title.trim().is_empty() {
            field_errors.insert("title".to_string(), "This field is required".to_string());
        }
        if self.link.trim().is_empty() {
            field_errors.insert("link".to_string(), "This field is required".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(
                "Missing required fields",
                field_errors,
            ))
        }
    }
}

/// Partial update payload for an item. As with `ItemDraft`, `owner` is not a
/// member, so ownership cannot be changed through the update path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ItemPatch {
    /// Drop blank fields so an empty string never overwrites stored data
    pub fn without_blanks(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        Self {
            title: keep(self.title),
            link: keep(self.link),
            icon: keep(self.icon),
        }
    }
}

impl Item {
    /// Build a new item from a validated draft, owned by `owner`
    pub fn from_draft(draft: ItemDraft, owner: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            link: draft.link,
            icon: draft.icon,
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields into the item in place
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(icon) = patch.icon {
            self.icon = Some(icon);
        }
        self.updated_at = Utc::now();
    }
}
