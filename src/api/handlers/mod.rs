pub mod budgets;
pub mod expenses;
pub mod health;
pub mod users;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::api::{error::ApiError, response::ApiResponse};

pub type HandlerResult = Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), ApiError>;

pub(crate) fn respond<T: Serialize>(status: StatusCode, body: &T) -> HandlerResult {
    let json = serde_json::to_value(body)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;

    Ok((status, Json(ApiResponse::success(json))))
}
