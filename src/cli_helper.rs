use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::cli_utils::confirm;
use crate::users::db_types::UserRecord;
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;

const CLI_POOL_SIZE: u32 = 2;

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config(database_url: &str) -> Result<AppConfig> {
    AppConfig::from_database_url(database_url, CLI_POOL_SIZE)
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(input: ActionRouterInput, app_config: AppConfig) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}

/// Look up the user an expense or budget operation acts for
pub async fn resolve_user(app_config: &AppConfig, username: &str) -> Result<UserRecord> {
    let input = ActionRouterInput::Users(UsersProcessorInput::ResolvePrincipal(username.to_string()));

    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Users(UsersProcessorOutput::ResolvePrincipal(user)) => Ok(user),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

/// Execute an operation with retry prompt on failure
pub async fn execute_with_retry<F, Fut, T>(operation: F, op_name: &str) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                tracing::debug!("{} failed: {:#}", op_name, e);
                eprintln!("\n{}: {}\n", "Error".red(), e);

                if !confirm("Operation failed. Retry?")? {
                    return Err(e);
                }
            }
        }
    }
}
