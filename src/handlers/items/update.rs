use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::access::require_ownership;
use crate::database::store::find_404;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::ItemPatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateItemBody {
    pub item: ItemPatch,
}

/// PATCH /items/:list_id/:item_id - merge fields into an embedded item.
///
/// Ordering is load-bearing: list lookup (404), item lookup (404), ownership
/// guard (401), then merge and save. A failed guard must leave the stored
/// document untouched. `ItemPatch` has no owner field, so ownership cannot be
/// rewritten here.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateItemBody>,
) -> Result<ApiResponse<()>, ApiError> {
    // Blank strings are dropped so they never overwrite stored fields
    let patch = body.item.without_blanks();

    let mut list = find_404(state.store.as_ref(), list_id).await?;

    let item = list
        .item_mut(item_id)
        .ok_or_else(|| ApiError::not_found(format!("Item {} not found", item_id)))?;

    require_ownership(&user, item.owner)?;

    item.apply(patch);
    state.store.save(&list).await?;

    Ok(ApiResponse::<()>::no_content())
}
