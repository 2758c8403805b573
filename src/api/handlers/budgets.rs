use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::{CurrentUser, JsonBody},
        handlers::{respond, HandlerResult},
        validation::{validate_not_empty, validate_record_id},
    },
    budgets::{
        db_types::BudgetInput,
        processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput, UpdateBudgetInputArgs},
    },
    users::db_types::UserRecord,
    utils::app_config::AppConfig,
};

async fn run(
    app_config: AppConfig,
    owner: UserRecord,
    input: BudgetsProcessorInput,
) -> Result<BudgetsProcessorOutput, ApiError> {
    match ActionRouterInput::Budgets(owner, input).process(app_config).await? {
        ActionRouterOutput::Budgets(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/budgets
pub async fn get_budgets(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
) -> HandlerResult {
    match run(app_config, owner, BudgetsProcessorInput::GetBudgets).await? {
        BudgetsProcessorOutput::GetBudgets(records) => respond(StatusCode::OK, &records),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/budgets
pub async fn create_budget(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    JsonBody(input): JsonBody<BudgetInput>,
) -> HandlerResult {
    match run(app_config, owner, BudgetsProcessorInput::CreateBudget(input)).await? {
        BudgetsProcessorOutput::CreateBudget(record) => respond(StatusCode::CREATED, &record),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/budgets/{id}
pub async fn update_budget(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<BudgetInput>,
) -> HandlerResult {
    let budget_id = validate_record_id(&id)?;
    let args = UpdateBudgetInputArgs {
        budget_id,
        budget: input,
    };

    match run(app_config, owner, BudgetsProcessorInput::UpdateBudget(args)).await? {
        BudgetsProcessorOutput::UpdateBudget(record) => respond(StatusCode::OK, &record),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/budgets/{id} - Succeeds even when no budget matched
pub async fn delete_budget(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<String>,
) -> HandlerResult {
    let budget_id = validate_record_id(&id)?;

    match run(app_config, owner, BudgetsProcessorInput::DeleteBudget(budget_id)).await? {
        BudgetsProcessorOutput::DeleteBudget => respond(StatusCode::OK, &json!({ "id": budget_id })),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/budgets/{category}/status - Spending against the category budget
pub async fn get_budget_status(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(category): Path<String>,
) -> HandlerResult {
    validate_not_empty(&category, "Category")?;

    match run(app_config, owner, BudgetsProcessorInput::GetBudgetStatus(category)).await? {
        BudgetsProcessorOutput::GetBudgetStatus(status) => respond(StatusCode::OK, &status),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
