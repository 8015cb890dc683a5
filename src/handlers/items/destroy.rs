use axum::{
    extract::{Path, State},
    Extension,
};
use uuid::Uuid;

use crate::access::require_ownership;
use crate::database::store::find_404;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::state::AppState;

/// DELETE /items/:list_id/:item_id - remove an embedded item.
///
/// Same lookup/guard ordering as update. The removal targets the id of the
/// item instance that passed the ownership guard, never the raw path
/// parameter of some other lookup.
pub async fn destroy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<ApiResponse<()>, ApiError> {
    let mut list = find_404(state.store.as_ref(), list_id).await?;

    let item = list
        .item(item_id)
        .ok_or_else(|| ApiError::not_found(format!("Item {} not found", item_id)))?;

    require_ownership(&user, item.owner)?;

    let checked_id = item.id;
    let _removed = list.remove_item(checked_id);
    state.store.save(&list).await?;

    tracing::debug!(list_id = %list_id, item_id = %checked_id, "item deleted");
    Ok(ApiResponse::<()>::no_content())
}
