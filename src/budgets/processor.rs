use crate::budgets::config::BudgetProcessorConfig;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::budgets::status::BudgetStatus;
use crate::expenses::filters::ExpenseScope;
use crate::store::LedgerStore;
use crate::utils::errors::TrackerError;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<BudgetProcessorConfig, BudgetsProcessorOutput> for BudgetsProcessorInput {
    async fn process<S: LedgerStore + Send>(&self, local_config: &mut BudgetProcessorConfig, store: &mut S) -> anyhow::Result<BudgetsProcessorOutput> {
        let owner_id = local_config.owner.id;

        match self {
            BudgetsProcessorInput::CreateBudget(input) => {
                let changes = input.to_changes()?;
                let record = store.insert_budget(&changes.for_owner(owner_id))?;
                tracing::info!(user_id = owner_id, budget_id = record.id, category = %record.category, "Budget created");

                Ok(BudgetsProcessorOutput::CreateBudget(record))
            }
            BudgetsProcessorInput::GetBudgets => {
                let records = store.find_budgets(owner_id)?;

                Ok(BudgetsProcessorOutput::GetBudgets(records))
            }
            BudgetsProcessorInput::UpdateBudget(args) => {
                let changes = args.budget.to_changes()?;
                let record = store
                    .update_owned_budget(args.budget_id, owner_id, &changes)?
                    .ok_or_else(|| TrackerError::not_found(format!("Budget {}", args.budget_id)))?;
                tracing::info!(user_id = owner_id, budget_id = record.id, "Budget updated");

                Ok(BudgetsProcessorOutput::UpdateBudget(record))
            }
            BudgetsProcessorInput::DeleteBudget(budget_id) => {
                // deleting an id that matches nothing is not an error
                let removed = store.delete_owned_budget(*budget_id, owner_id)?;
                tracing::info!(user_id = owner_id, budget_id = *budget_id, removed, "Budget delete");

                Ok(BudgetsProcessorOutput::DeleteBudget)
            }
            BudgetsProcessorInput::GetBudgetStatus(category) => {
                let budget = store
                    .find_budget_by_category(owner_id, category)?
                    .ok_or_else(|| TrackerError::not_found(format!("Budget for category '{}'", category)))?;

                let scope = ExpenseScope::CategoryInRange {
                    category: budget.category.clone(),
                    start: budget.start_date,
                    end: budget.end_date,
                };
                let expenses = store.find_expenses(owner_id, &scope)?;
                let status = BudgetStatus::compute(budget, expenses);

                if status.is_exceeded() {
                    tracing::info!(user_id = owner_id, budget_id = status.budget.id, "Budget exceeded");
                }

                Ok(BudgetsProcessorOutput::GetBudgetStatus(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use crate::budgets::db_types::{BudgetInput, BudgetRecord};
    use crate::budgets::processor_enums::UpdateBudgetInputArgs;
    use crate::expenses::db_types::ExpenseChanges;
    use crate::store::memory::MemoryLedgerStore;
    use crate::users::db_types::CreateUser;

    fn register(store: &mut MemoryLedgerStore, username: &str) -> BudgetProcessorConfig {
        let owner = store
            .insert_user(&CreateUser {
                username: username.to_string(),
                credential: "opaque".to_string(),
            })
            .unwrap();
        BudgetProcessorConfig { owner }
    }

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::from_str(raw).unwrap()
    }

    fn budget_input(category: &str, amount: &str, start: &str, end: &str) -> BudgetInput {
        BudgetInput {
            category: category.to_string(),
            amount: Some(BigDecimal::from_str(amount).unwrap()),
            start_date: Some(date(start)),
            end_date: Some(date(end)),
            description: None,
        }
    }

    fn record_expense(store: &mut MemoryLedgerStore, owner_id: i64, amount: &str, on: &str, category: &str) {
        let changes = ExpenseChanges {
            title: format!("{} on {}", category, on),
            amount: BigDecimal::from_str(amount).unwrap(),
            date: date(on),
            category: category.to_string(),
            description: None,
        };
        store.insert_expense(&changes.for_owner(owner_id)).unwrap();
    }

    async fn create(store: &mut MemoryLedgerStore, config: &mut BudgetProcessorConfig, input: BudgetInput) -> BudgetRecord {
        match BudgetsProcessorInput::CreateBudget(input).process(config, store).await.unwrap() {
            BudgetsProcessorOutput::CreateBudget(record) => record,
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_budgets() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");
        let mut bob = register(&mut store, "bob");

        create(&mut store, &mut alice, budget_input("food", "100.00", "2024-01-01", "2024-01-31")).await;
        create(&mut store, &mut alice, budget_input("travel", "500.00", "2024-01-01", "2024-06-30")).await;
        create(&mut store, &mut bob, budget_input("food", "80.00", "2024-01-01", "2024-01-31")).await;

        match BudgetsProcessorInput::GetBudgets.process(&mut alice, &mut store).await.unwrap() {
            BudgetsProcessorOutput::GetBudgets(records) => {
                assert_eq!(records.len(), 2);
                assert!(records.iter().all(|b| b.user_id == alice.owner.id));
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_window() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");

        let err = BudgetsProcessorInput::CreateBudget(budget_input("food", "100.00", "2024-02-01", "2024-01-01"))
            .process(&mut alice, &mut store)
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_budget_status_counts_only_window_and_category() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");
        let bob = register(&mut store, "bob");
        let alice_id = alice.owner.id;

        create(&mut store, &mut alice, budget_input("food", "100.00", "2024-01-01", "2024-01-31")).await;
        record_expense(&mut store, alice_id, "30.00", "2024-01-01", "food");
        record_expense(&mut store, alice_id, "40.00", "2024-01-31", "food");
        record_expense(&mut store, alice_id, "50.00", "2024-02-01", "food");
        record_expense(&mut store, alice_id, "25.00", "2024-01-15", "transport");
        record_expense(&mut store, bob.owner.id, "60.00", "2024-01-15", "food");

        let status = match BudgetsProcessorInput::GetBudgetStatus("food".to_string())
            .process(&mut alice, &mut store)
            .await
            .unwrap()
        {
            BudgetsProcessorOutput::GetBudgetStatus(status) => status,
            other => panic!("unexpected output {:?}", other),
        };

        assert_eq!(status.total_spent, BigDecimal::from_str("70.00").unwrap());
        assert_eq!(status.remaining, BigDecimal::from_str("30.00").unwrap());
        assert!((status.percentage_used - 70.0).abs() < 1e-9);
        assert_eq!(status.expenses.len(), 2);
        assert!(status.expenses.iter().all(|e| e.date <= date("2024-01-31")));
    }

    #[tokio::test]
    async fn test_status_for_unbudgeted_category_is_not_found() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");

        let err = BudgetsProcessorInput::GetBudgetStatus("hobbies".to_string())
            .process(&mut alice, &mut store)
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_is_owner_scoped_and_replaces_fields() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");
        let mut bob = register(&mut store, "bob");

        let mut original = budget_input("food", "100.00", "2024-01-01", "2024-01-31");
        original.description = Some("groceries".to_string());
        let record = create(&mut store, &mut alice, original).await;

        let hijack = BudgetsProcessorInput::UpdateBudget(UpdateBudgetInputArgs {
            budget_id: record.id,
            budget: budget_input("food", "1.00", "2024-01-01", "2024-01-31"),
        })
        .process(&mut bob, &mut store)
        .await
        .unwrap_err();
        assert!(matches!(hijack.downcast_ref::<TrackerError>(), Some(TrackerError::NotFound(_))));

        let updated = match BudgetsProcessorInput::UpdateBudget(UpdateBudgetInputArgs {
            budget_id: record.id,
            budget: budget_input("dining", "150.00", "2024-01-01", "2024-02-29"),
        })
        .process(&mut alice, &mut store)
        .await
        .unwrap()
        {
            BudgetsProcessorOutput::UpdateBudget(updated) => updated,
            other => panic!("unexpected output {:?}", other),
        };

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.category, "dining");
        assert_eq!(updated.amount, BigDecimal::from(150));
        assert_eq!(updated.end_date, date("2024-02-29"));
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_and_owner_scoped() {
        let mut store = MemoryLedgerStore::new();
        let mut alice = register(&mut store, "alice");
        let mut bob = register(&mut store, "bob");

        let record = create(&mut store, &mut alice, budget_input("food", "100.00", "2024-01-01", "2024-01-31")).await;

        BudgetsProcessorInput::DeleteBudget(9_999).process(&mut alice, &mut store).await.unwrap();
        BudgetsProcessorInput::DeleteBudget(record.id).process(&mut bob, &mut store).await.unwrap();
        assert_eq!(store.find_budgets(alice.owner.id).unwrap().len(), 1);

        BudgetsProcessorInput::DeleteBudget(record.id).process(&mut alice, &mut store).await.unwrap();
        assert!(store.find_budgets(alice.owner.id).unwrap().is_empty());
    }
}
