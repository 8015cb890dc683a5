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
use crate::models::ListPatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateListBody {
    pub list: ListPatch,
}

/// PATCH /lists/:list_id - merge title/customURL into a list.
/// Guard runs before any mutation; `ListPatch` carries neither owner nor
/// items, so only the list's own fields can change here.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<Uuid>,
    Json(body): Json<UpdateListBody>,
) -> Result<ApiResponse<()>, ApiError> {
    let patch = body.list.without_blanks();

    let mut list = find_404(state.store.as_ref(), list_id).await?;

    require_ownership(&user, list.owner)?;

    list.apply(patch);
    state.store.save(&list).await?;

    Ok(ApiResponse::<()>::no_content())
}
