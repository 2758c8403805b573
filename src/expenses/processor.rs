use crate::expenses::config::ExpenseProcessorConfig;
use crate::expenses::filters::ExpenseScope;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::store::LedgerStore;
use crate::utils::errors::TrackerError;
use crate::utils::traits::ActionProcessor;

fn expense_not_found(expense_id: i64) -> TrackerError {
    TrackerError::not_found(format!("Expense {}", expense_id))
}

impl ActionProcessor<ExpenseProcessorConfig, ExpensesProcessorOutput> for ExpensesProcessorInput {
    async fn process<S: LedgerStore + Send>(&self, local_config: &mut ExpenseProcessorConfig, store: &mut S) -> anyhow::Result<ExpensesProcessorOutput> {
        let owner_id = local_config.owner.id;

        match self {
            ExpensesProcessorInput::CreateExpense(input) => {
                let changes = input.to_changes()?;
                let record = store.insert_expense(&changes.for_owner(owner_id))?;
                tracing::info!(user_id = owner_id, expense_id = record.id, "Expense created");

                Ok(ExpensesProcessorOutput::CreateExpense(record))
            }
            ExpensesProcessorInput::GetExpense(expense_id) => {
                let record = store
                    .find_owned_expense(*expense_id, owner_id)?
                    .ok_or_else(|| expense_not_found(*expense_id))?;

                Ok(ExpensesProcessorOutput::GetExpense(record))
            }
            ExpensesProcessorInput::GetExpenses => {
                let records = store.find_expenses(owner_id, &ExpenseScope::All)?;

                Ok(ExpensesProcessorOutput::GetExpenses(records))
            }
            ExpensesProcessorInput::UpdateExpense(args) => {
                let changes = args.expense.to_changes()?;
                let record = store
                    .update_owned_expense(args.expense_id, owner_id, &changes)?
                    .ok_or_else(|| expense_not_found(args.expense_id))?;
                tracing::info!(user_id = owner_id, expense_id = record.id, "Expense updated");

                Ok(ExpensesProcessorOutput::UpdateExpense(record))
            }
            ExpensesProcessorInput::DeleteExpense(expense_id) => {
                let removed = store.delete_owned_expense(*expense_id, owner_id)?;
                if removed == 0 {
                    return Err(expense_not_found(*expense_id).into());
                }
                tracing::info!(user_id = owner_id, expense_id = *expense_id, "Expense deleted");

                Ok(ExpensesProcessorOutput::DeleteExpense)
            }
            ExpensesProcessorInput::FilterExpenses(filter) => {
                let scope = ExpenseScope::resolve(filter)?;
                tracing::debug!(user_id = owner_id, ?scope, "Filtering expenses");
                let records = store.find_expenses(owner_id, &scope)?;

                Ok(ExpensesProcessorOutput::FilterExpenses(records))
            }
        }
    }
}
