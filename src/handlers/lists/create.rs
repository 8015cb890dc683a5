use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::{List, ListDraft};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateListBody {
    pub list: ListDraft,
}

/// POST /lists - create an empty list owned by the requester
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateListBody>,
) -> Result<ApiResponse<Value>, ApiError> {
    body.list.validate()?;

    let list = List::from_draft(body.list, user.user_id);
    state.store.insert(&list).await?;

    tracing::debug!(list_id = %list.id, "list created");
    Ok(ApiResponse::created(json!({ "list": list })))
}
