//! Ownership checks shared by all mutating handlers.

use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Require that `owner` is the requesting user.
///
/// Succeeds silently when they match; otherwise returns `Unauthorized` so the
/// calling handler short-circuits before any mutation or save runs.
pub fn require_ownership(user: &AuthUser, owner: Uuid) -> Result<(), ApiError> {
    if user.user_id == owner {
        Ok(())
    } else {
        Err(ApiError::unauthorized(
            "You do not have permission to modify this resource",
        ))
    }
}
