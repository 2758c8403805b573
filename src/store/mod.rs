//! Storage access for users, expenses and budgets.
//!
//! Every expense and budget lookup takes the owner id and filters on it in
//! the same query, so a record owned by someone else is simply absent.

pub mod memory;
pub mod postgres;

use crate::budgets::db_types::{BudgetChanges, BudgetRecord, CreateBudget};
use crate::expenses::db_types::{CreateExpense, ExpenseChanges, ExpenseRecord};
use crate::expenses::filters::ExpenseScope;
use crate::users::db_types::{CreateUser, UserRecord};
use crate::utils::errors::TrackerResult;

pub trait LedgerStore {
    // users

    fn find_user_by_username(&mut self, username: &str) -> TrackerResult<Option<UserRecord>>;

    /// Fails with a validation error when the username is taken.
    fn insert_user(&mut self, user: &CreateUser) -> TrackerResult<UserRecord>;

    // expenses

    fn insert_expense(&mut self, expense: &CreateExpense) -> TrackerResult<ExpenseRecord>;

    fn find_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<Option<ExpenseRecord>>;

    /// Owner's expenses narrowed by `scope`, ordered by id.
    fn find_expenses(&mut self, owner_id: i64, scope: &ExpenseScope) -> TrackerResult<Vec<ExpenseRecord>>;

    /// `None` when no expense with that id belongs to the owner.
    fn update_owned_expense(
        &mut self,
        expense_id: i64,
        owner_id: i64,
        changes: &ExpenseChanges,
    ) -> TrackerResult<Option<ExpenseRecord>>;

    /// Number of rows removed.
    fn delete_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<usize>;

    // budgets

    fn insert_budget(&mut self, budget: &CreateBudget) -> TrackerResult<BudgetRecord>;

    fn find_budgets(&mut self, owner_id: i64) -> TrackerResult<Vec<BudgetRecord>>;

    /// Lowest id wins when the owner has several budgets for one category.
    fn find_budget_by_category(&mut self, owner_id: i64, category: &str) -> TrackerResult<Option<BudgetRecord>>;

    fn update_owned_budget(
        &mut self,
        budget_id: i64,
        owner_id: i64,
        changes: &BudgetChanges,
    ) -> TrackerResult<Option<BudgetRecord>>;

    fn delete_owned_budget(&mut self, budget_id: i64, owner_id: i64) -> TrackerResult<usize>;
}
