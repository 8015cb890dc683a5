use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::item::Item;
use crate::error::ApiError;

/// A titled, URL-slugged collection of items, owned by exactly one user.
///
/// The list is the unit of persistence: items live only inside `items` and
/// every mutation is saved by rewriting the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "customURL")]
    pub custom_url: String,
    pub owner: Uuid,
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating a list. Owner is never client-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDraft {
    pub title: String,
    #[serde(rename = "customURL")]
    pub custom_url: String,
}

impl ListDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.title.trim().is_empty() {
            field_errors.insert("title".to_string(), "This field is required".to_string());
        }
        if self.custom_url.trim().is_empty() {
            field_errors.insert("customURL".to_string(), "This field is required".to_string());
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

/// Partial update payload for a list; `owner` and `items` are not members,
/// so neither can be rewritten through the update path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "customURL")]
    pub custom_url: Option<String>,
}

impl ListPatch {
    /// Drop blank fields so an empty string never overwrites stored data
    pub fn without_blanks(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        Self {
            title: keep(self.title),
            custom_url: keep(self.custom_url),
        }
    }
}

impl List {
    pub fn from_draft(draft: ListDraft, owner: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            custom_url: draft.custom_url,
            owner,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ListPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(custom_url) = patch.custom_url {
            self.custom_url = custom_url;
        }
        self.updated_at = Utc::now();
    }

    /// Append an item; insertion order is display order
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Locate an embedded item by its subdocument id
    pub fn item(&self, item_id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Excise the item with the given id, returning it if present.
    /// Removes exactly one element; the rest of the sequence keeps its order.
    pub fn remove_item(&mut self, item_id: Uuid) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ItemDraft;

    fn list_with_items(owner: Uuid, n: usize) -> List {
        let mut list = List::from_draft(
            ListDraft {
                title: "Reading".to_string(),
                custom_url: "reading".to_string(),
            },
            owner,
        );
        for i in 0..n {
            list.push_item(Item::from_draft(
                ItemDraft {
                    title: format!("item-{}", i),
                    link: format!("http://example.com/{}", i),
                    icon: None,
                },
                owner,
            ));
        }
        list
    }

    #[test]
    fn items_keep_insertion_order() {
        let list = list_with_items(Uuid::new_v4(), 3);
        let titles: Vec<_> = list.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["item-0", "item-1", "item-2"]);
    }

    #[test]
    fn remove_item_excises_exactly_the_target() {
        let mut list = list_with_items(Uuid::new_v4(), 3);
        let target = list.items[1].id;

        let removed = list.remove_item(target).expect("item should be present");

        assert_eq!(removed.id, target);
        assert_eq!(list.items.len(), 2);
        assert!(list.item(target).is_none());
        // Remaining items untouched, order preserved
        assert_eq!(list.items[0].title, "item-0");
        assert_eq!(list.items[1].title, "item-2");
    }

    #[test]
    fn remove_item_on_unknown_id_is_a_noop() {
        let mut list = list_with_items(Uuid::new_v4(), 2);
        assert!(list.remove_item(Uuid::new_v4()).is_none());
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn custom_url_uses_wire_name() {
        let list = list_with_items(Uuid::new_v4(), 0);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["customURL"], "reading");
        assert!(json.get("custom_url").is_none());
    }
}
