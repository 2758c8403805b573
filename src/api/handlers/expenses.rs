use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::{CurrentUser, JsonBody, QueryParams},
        handlers::{respond, HandlerResult},
        validation::validate_record_id,
    },
    expenses::{
        db_types::ExpenseInput,
        filters::ExpenseFilter,
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput, UpdateExpenseInputArgs},
    },
    users::db_types::UserRecord,
    utils::app_config::AppConfig,
};

async fn run(
    app_config: AppConfig,
    owner: UserRecord,
    input: ExpensesProcessorInput,
) -> Result<ExpensesProcessorOutput, ApiError> {
    match ActionRouterInput::Expenses(owner, input).process(app_config).await? {
        ActionRouterOutput::Expenses(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses - Every expense the caller owns
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
) -> HandlerResult {
    match run(app_config, owner, ExpensesProcessorInput::GetExpenses).await? {
        ExpensesProcessorOutput::GetExpenses(records) => respond(StatusCode::OK, &records),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/filter - Narrow by category and/or inclusive date range
pub async fn filter_expenses(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    QueryParams(filter): QueryParams<ExpenseFilter>,
) -> HandlerResult {
    match run(app_config, owner, ExpensesProcessorInput::FilterExpenses(filter)).await? {
        ExpensesProcessorOutput::FilterExpenses(records) => respond(StatusCode::OK, &records),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/{id}
pub async fn get_expense(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<String>,
) -> HandlerResult {
    let expense_id = validate_record_id(&id)?;

    match run(app_config, owner, ExpensesProcessorInput::GetExpense(expense_id)).await? {
        ExpensesProcessorOutput::GetExpense(record) => respond(StatusCode::OK, &record),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/expenses
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> HandlerResult {
    match run(app_config, owner, ExpensesProcessorInput::CreateExpense(input)).await? {
        ExpensesProcessorOutput::CreateExpense(record) => respond(StatusCode::CREATED, &record),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/expenses/{id} - Full replace of the mutable fields
pub async fn update_expense(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> HandlerResult {
    let expense_id = validate_record_id(&id)?;
    let args = UpdateExpenseInputArgs {
        expense_id,
        expense: input,
    };

    match run(app_config, owner, ExpensesProcessorInput::UpdateExpense(args)).await? {
        ExpensesProcessorOutput::UpdateExpense(record) => respond(StatusCode::OK, &record),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/expenses/{id} - 404 when nothing was removed
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<String>,
) -> HandlerResult {
    let expense_id = validate_record_id(&id)?;

    match run(app_config, owner, ExpensesProcessorInput::DeleteExpense(expense_id)).await? {
        ExpensesProcessorOutput::DeleteExpense => respond(StatusCode::OK, &json!({ "id": expense_id })),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
