use axum::http::StatusCode;

use crate::api::{extractors::CurrentUser, handlers::{respond, HandlerResult}};

/// GET /api/user/me - The caller's stored identity, credential omitted
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> HandlerResult {
    tracing::debug!(user_id = user.id, "Resolved current user");
    respond(StatusCode::OK, &user)
}
