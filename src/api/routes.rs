use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{
    config::ApiConfig,
    error::ApiError,
    handlers::{budgets::*, expenses::*, health, users::*},
    middleware::auth::{extract_principal, validate_auth},
};
use crate::utils::app_config::AppConfig;

pub fn router(app_config: AppConfig, api_config: ApiConfig) -> Router {
    // Custom auth middleware: bearer secret, then the principal header
    let auth_layer = middleware::from_fn(move |mut req: Request, next: Next| {
        let api_config = api_config.clone();
        async move {
            // Skip auth for /health endpoint
            if req.uri().path() == "/health" {
                return Ok::<Response, ApiError>(next.run(req).await.into_response());
            }

            validate_auth(req.headers(), &api_config.secret_key).await?;
            let principal = extract_principal(req.headers(), &api_config.principal_header)?;
            req.extensions_mut().insert(principal);

            Ok::<Response, ApiError>(next.run(req).await.into_response())
        }
    });

    Router::new()
        .route("/health", get(health::health))
        // Identity
        .route("/api/user/me", get(get_current_user))
        // Expenses
        .route("/api/expenses", get(get_expenses).post(create_expense))
        .route("/api/expenses/filter", get(filter_expenses))
        .route(
            "/api/expenses/:id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        // Budgets
        .route("/api/budgets", get(get_budgets).post(create_budget))
        .route("/api/budgets/:id", axum::routing::put(update_budget).delete(delete_budget))
        // matchit needs one parameter name per segment, so the category travels as `:id`
        .route("/api/budgets/:id/status", get(get_budget_status))
        .layer(auth_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
