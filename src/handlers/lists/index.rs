use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /lists - the requester's lists, oldest first
pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let lists = state.store.find_by_owner(user.user_id).await?;

    Ok(Json(json!({ "lists": lists })))
}
