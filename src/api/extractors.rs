use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::api::error::ApiError;
use crate::api::middleware::auth::Principal;
use crate::users::db_types::UserRecord;
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;

/// JSON body whose rejections use the API error envelope.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        Ok(JsonBody(value))
    }
}

/// Query string whose rejections use the API error envelope.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse query string: {}", e)))?;

        Ok(QueryParams(value))
    }
}

/// The stored user behind the principal the auth middleware accepted.
pub struct CurrentUser(pub UserRecord);

#[async_trait]
impl FromRequestParts<AppConfig> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppConfig) -> Result<Self, Self::Rejection> {
        let Principal(username) = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Missing authenticated user"))?;

        let action = ActionRouterInput::Users(UsersProcessorInput::ResolvePrincipal(username));

        match action.process(state.clone()).await? {
            ActionRouterOutput::Users(UsersProcessorOutput::ResolvePrincipal(user)) => Ok(CurrentUser(user)),
            _ => Err(ApiError::internal_error("Unexpected response type")),
        }
    }
}
