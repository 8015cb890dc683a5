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

/// DELETE /lists/:list_id - delete a list and, implicitly, all its items
pub async fn destroy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<Uuid>,
) -> Result<ApiResponse<()>, ApiError> {
    let list = find_404(state.store.as_ref(), list_id).await?;

    require_ownership(&user, list.owner)?;

    state.store.delete(list.id).await?;

    tracing::debug!(list_id = %list_id, "list deleted");
    Ok(ApiResponse::<()>::no_content())
}
