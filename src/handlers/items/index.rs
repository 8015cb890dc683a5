use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::store::find_404;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /items/:list_id - items of a list, in stored order.
///
/// Reads require authentication but are open to any authenticated user;
/// only mutations are ownership-checked.
pub async fn index(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let list = find_404(state.store.as_ref(), list_id).await?;

    Ok(Json(json!({ "items": list.items })))
}
