use std::collections::BTreeMap;

use crate::budgets::db_types::{BudgetChanges, BudgetRecord, CreateBudget};
use crate::expenses::db_types::{CreateExpense, ExpenseChanges, ExpenseRecord};
use crate::expenses::filters::ExpenseScope;
use crate::store::LedgerStore;
use crate::users::db_types::{CreateUser, UserRecord};
use crate::utils::errors::{TrackerError, TrackerResult};

/// In-memory store with the same ownership and ordering rules as the
/// Postgres adapter. Ids are assigned from per-table counters starting at 1.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    users: BTreeMap<i64, UserRecord>,
    expenses: BTreeMap<i64, ExpenseRecord>,
    budgets: BTreeMap<i64, BudgetRecord>,
    last_user_id: i64,
    last_expense_id: i64,
    last_budget_id: i64,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn owned_expense_mut(&mut self, expense_id: i64, owner_id: i64) -> Option<&mut ExpenseRecord> {
        self.expenses
            .get_mut(&expense_id)
            .filter(|expense| expense.user_id == owner_id)
    }

    fn owned_budget_mut(&mut self, budget_id: i64, owner_id: i64) -> Option<&mut BudgetRecord> {
        self.budgets
            .get_mut(&budget_id)
            .filter(|budget| budget.user_id == owner_id)
    }

    fn ensure_user_exists(&self, owner_id: i64) -> TrackerResult<()> {
        if self.users.contains_key(&owner_id) {
            Ok(())
        } else {
            Err(TrackerError::store(format!("user {} does not exist", owner_id)))
        }
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn find_user_by_username(&mut self, username: &str) -> TrackerResult<Option<UserRecord>> {
        Ok(self.users.values().find(|u| u.username == username).cloned())
    }

    fn insert_user(&mut self, user: &CreateUser) -> TrackerResult<UserRecord> {
        if self.users.values().any(|u| u.username == user.username) {
            return Err(TrackerError::validation(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        self.last_user_id += 1;
        let record = UserRecord {
            id: self.last_user_id,
            username: user.username.clone(),
            credential: user.credential.clone(),
        };
        self.users.insert(record.id, record.clone());

        Ok(record)
    }

    fn insert_expense(&mut self, expense: &CreateExpense) -> TrackerResult<ExpenseRecord> {
        self.ensure_user_exists(expense.user_id)?;

        self.last_expense_id += 1;
        let record = ExpenseRecord {
            id: self.last_expense_id,
            user_id: expense.user_id,
            title: expense.title.clone(),
            amount: expense.amount.clone(),
            date: expense.date,
            category: expense.category.clone(),
            description: expense.description.clone(),
        };
        self.expenses.insert(record.id, record.clone());

        Ok(record)
    }

    fn find_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<Option<ExpenseRecord>> {
        Ok(self.owned_expense_mut(expense_id, owner_id).map(|e| e.clone()))
    }

    fn find_expenses(&mut self, owner_id: i64, scope: &ExpenseScope) -> TrackerResult<Vec<ExpenseRecord>> {
        Ok(self
            .expenses
            .values()
            .filter(|e| e.user_id == owner_id && scope.matches(e))
            .cloned()
            .collect())
    }

    fn update_owned_expense(
        &mut self,
        expense_id: i64,
        owner_id: i64,
        changes: &ExpenseChanges,
    ) -> TrackerResult<Option<ExpenseRecord>> {
        let Some(expense) = self.owned_expense_mut(expense_id, owner_id) else {
            return Ok(None);
        };

        expense.title = changes.title.clone();
        expense.amount = changes.amount.clone();
        expense.date = changes.date;
        expense.category = changes.category.clone();
        expense.description = changes.description.clone();

        Ok(Some(expense.clone()))
    }

    fn delete_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<usize> {
        if self.owned_expense_mut(expense_id, owner_id).is_none() {
            return Ok(0);
        }
        self.expenses.remove(&expense_id);

        Ok(1)
    }

    fn insert_budget(&mut self, budget: &CreateBudget) -> TrackerResult<BudgetRecord> {
        self.ensure_user_exists(budget.user_id)?;

        self.last_budget_id += 1;
        let record = BudgetRecord {
            id: self.last_budget_id,
            user_id: budget.user_id,
            category: budget.category.clone(),
            amount: budget.amount.clone(),
            start_date: budget.start_date,
            end_date: budget.end_date,
            description: budget.description.clone(),
        };
        self.budgets.insert(record.id, record.clone());

        Ok(record)
    }

    fn find_budgets(&mut self, owner_id: i64) -> TrackerResult<Vec<BudgetRecord>> {
        Ok(self
            .budgets
            .values()
            .filter(|b| b.user_id == owner_id)
            .cloned()
            .collect())
    }

    fn find_budget_by_category(&mut self, owner_id: i64, category: &str) -> TrackerResult<Option<BudgetRecord>> {
        Ok(self
            .budgets
            .values()
            .find(|b| b.user_id == owner_id && b.category == category)
            .cloned())
    }

    fn update_owned_budget(
        &mut self,
        budget_id: i64,
        owner_id: i64,
        changes: &BudgetChanges,
    ) -> TrackerResult<Option<BudgetRecord>> {
        let Some(budget) = self.owned_budget_mut(budget_id, owner_id) else {
            return Ok(None);
        };

        budget.category = changes.category.clone();
        budget.amount = changes.amount.clone();
        budget.start_date = changes.start_date;
        budget.end_date = changes.end_date;
        budget.description = changes.description.clone();

        Ok(Some(budget.clone()))
    }

    fn delete_owned_budget(&mut self, budget_id: i64, owner_id: i64) -> TrackerResult<usize> {
        if self.owned_budget_mut(budget_id, owner_id).is_none() {
            return Ok(0);
        }
        self.budgets.remove(&budget_id);

        Ok(1)
    }
}
