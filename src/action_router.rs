use anyhow::Result;

use crate::budgets::config::BudgetProcessorConfig;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::expenses::config::ExpenseProcessorConfig;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::store::LedgerStore;
use crate::store::postgres::PgLedgerStore;
use crate::users::config::UsersProcessorConfig;
use crate::users::db_types::UserRecord;
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::{AppConfig, StoreBackend};
use crate::utils::db::get_conn;
use crate::utils::traits::ActionProcessor;

pub enum ActionRouterInput {
    Users(UsersProcessorInput),
    /// Expense operation on behalf of an already resolved owner.
    Expenses(UserRecord, ExpensesProcessorInput),
    Budgets(UserRecord, BudgetsProcessorInput),
}

#[derive(Debug)]
pub enum ActionRouterOutput {
    Users(UsersProcessorOutput),
    Expenses(ExpensesProcessorOutput),
    Budgets(BudgetsProcessorOutput),
}

impl ActionRouterInput {
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        match &app_config.store {
            StoreBackend::Postgres(pool) => {
                let mut conn = get_conn(pool)?;
                let mut store = PgLedgerStore::new(&mut conn);
                self.process_with(&mut store).await
            }
            StoreBackend::Memory(memory) => {
                let mut guard = memory.lock().await;
                self.process_with(&mut *guard).await
            }
        }
    }

    pub async fn process_with<S: LedgerStore + Send>(&self, store: &mut S) -> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::Users(processor) => {
                let mut config = UsersProcessorConfig::default();
                let res = processor.process(&mut config, store).await?;

                Ok(ActionRouterOutput::Users(res))
            }
            ActionRouterInput::Expenses(owner, processor) => {
                let mut config = ExpenseProcessorConfig { owner: owner.clone() };
                let res = processor.process(&mut config, store).await?;

                Ok(ActionRouterOutput::Expenses(res))
            }
            ActionRouterInput::Budgets(owner, processor) => {
                let mut config = BudgetProcessorConfig { owner: owner.clone() };
                let res = processor.process(&mut config, store).await?;

                Ok(ActionRouterOutput::Budgets(res))
            }
        }
    }
}
