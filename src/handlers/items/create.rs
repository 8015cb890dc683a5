use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::store::find_404;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::{Item, ItemDraft};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateItemBody {
    pub item: ItemDraft,
}

/// POST /items/:list_id - append an item to a list.
///
/// The new item's owner is always the requester; any owner in the payload is
/// discarded during deserialization. Responds 201 with the stored item,
/// including its generated id.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<Uuid>,
    Json(body): Json<CreateItemBody>,
) -> Result<ApiResponse<Value>, ApiError> {
    body.item.validate()?;

    let mut list = find_404(state.store.as_ref(), list_id).await?;

    let item = Item::from_draft(body.item, user.user_id);
    list.push_item(item.clone());
    state.store.save(&list).await?;

    tracing::debug!(list_id = %list_id, item_id = %item.id, "item created");
    Ok(ApiResponse::created(json!({ "item": item })))
}
