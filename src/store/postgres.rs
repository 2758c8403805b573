use diesel::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::budgets::db_types::{BudgetChanges, BudgetRecord, CreateBudget};
use crate::expenses::db_types::{CreateExpense, ExpenseChanges, ExpenseRecord};
use crate::expenses::filters::ExpenseScope;
use crate::schema::budgets as BudgetsTable;
use crate::schema::expenses as ExpensesTable;
use crate::schema::users as UsersTable;
use crate::store::LedgerStore;
use crate::users::db_types::{CreateUser, UserRecord};
use crate::utils::errors::{TrackerError, TrackerResult};

/// Diesel-backed store over one pooled connection, held for a single request.
pub struct PgLedgerStore<'db> {
    conn: &'db mut PgConnection,
}

impl<'db> PgLedgerStore<'db> {
    pub fn new(conn: &'db mut PgConnection) -> Self {
        Self { conn }
    }
}

impl LedgerStore for PgLedgerStore<'_> {
    fn find_user_by_username(&mut self, name: &str) -> TrackerResult<Option<UserRecord>> {
        use crate::schema::users::dsl::*;

        let res = users
            .filter(username.eq(name))
            .select(UserRecord::as_select())
            .first::<UserRecord>(self.conn)
            .optional()?;

        Ok(res)
    }

    fn insert_user(&mut self, user: &CreateUser) -> TrackerResult<UserRecord> {
        let res = diesel::insert_into(UsersTable::table)
            .values(user)
            .returning(UserRecord::as_returning())
            .get_result::<UserRecord>(self.conn);

        match res {
            Ok(record) => Ok(record),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => Err(
                TrackerError::validation(format!("Username '{}' is already taken", user.username)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    fn insert_expense(&mut self, expense: &CreateExpense) -> TrackerResult<ExpenseRecord> {
        let res = diesel::insert_into(ExpensesTable::table)
            .values(expense)
            .returning(ExpenseRecord::as_returning())
            .get_result::<ExpenseRecord>(self.conn)?;

        Ok(res)
    }

    fn find_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<Option<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        let res = expenses
            .filter(id.eq(expense_id))
            .filter(user_id.eq(owner_id))
            .select(ExpenseRecord::as_select())
            .first::<ExpenseRecord>(self.conn)
            .optional()?;

        Ok(res)
    }

    fn find_expenses(&mut self, owner_id: i64, scope: &ExpenseScope) -> TrackerResult<Vec<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        let mut query = expenses.filter(user_id.eq(owner_id)).into_boxed();
        match scope {
            ExpenseScope::All => {}
            ExpenseScope::Category(wanted) => {
                query = query.filter(category.eq(wanted.as_str()));
            }
            ExpenseScope::DateRange { start, end } => {
                query = query.filter(date.between(*start, *end));
            }
            ExpenseScope::CategoryInRange { category: wanted, start, end } => {
                query = query
                    .filter(category.eq(wanted.as_str()))
                    .filter(date.between(*start, *end));
            }
        }

        let res = query
            .order(id.asc())
            .select(ExpenseRecord::as_select())
            .load::<ExpenseRecord>(self.conn)?;

        Ok(res)
    }

    fn update_owned_expense(
        &mut self,
        expense_id: i64,
        owner_id: i64,
        changes: &ExpenseChanges,
    ) -> TrackerResult<Option<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        let res = diesel::update(ExpensesTable::table)
            .filter(id.eq(expense_id))
            .filter(user_id.eq(owner_id))
            .set(changes)
            .returning(ExpenseRecord::as_returning())
            .get_result::<ExpenseRecord>(self.conn)
            .optional()?;

        Ok(res)
    }

    fn delete_owned_expense(&mut self, expense_id: i64, owner_id: i64) -> TrackerResult<usize> {
        use crate::schema::expenses::dsl::*;

        let removed = diesel::delete(ExpensesTable::table)
            .filter(id.eq(expense_id))
            .filter(user_id.eq(owner_id))
            .execute(self.conn)?;

        Ok(removed)
    }

    fn insert_budget(&mut self, budget: &CreateBudget) -> TrackerResult<BudgetRecord> {
        let res = diesel::insert_into(BudgetsTable::table)
            .values(budget)
            .returning(BudgetRecord::as_returning())
            .get_result::<BudgetRecord>(self.conn)?;

        Ok(res)
    }

    fn find_budgets(&mut self, owner_id: i64) -> TrackerResult<Vec<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;

        let res = budgets
            .filter(user_id.eq(owner_id))
            .order(id.asc())
            .select(BudgetRecord::as_select())
            .load::<BudgetRecord>(self.conn)?;

        Ok(res)
    }

    fn find_budget_by_category(&mut self, owner_id: i64, wanted: &str) -> TrackerResult<Option<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;

        let res = budgets
            .filter(user_id.eq(owner_id))
            .filter(category.eq(wanted))
            .order(id.asc())
            .select(BudgetRecord::as_select())
            .first::<BudgetRecord>(self.conn)
            .optional()?;

        Ok(res)
    }

    fn update_owned_budget(
        &mut self,
        budget_id: i64,
        owner_id: i64,
        changes: &BudgetChanges,
    ) -> TrackerResult<Option<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;

        let res = diesel::update(BudgetsTable::table)
            .filter(id.eq(budget_id))
            .filter(user_id.eq(owner_id))
            .set(changes)
            .returning(BudgetRecord::as_returning())
            .get_result::<BudgetRecord>(self.conn)
            .optional()?;

        Ok(res)
    }

    fn delete_owned_budget(&mut self, budget_id: i64, owner_id: i64) -> TrackerResult<usize> {
        use crate::schema::budgets::dsl::*;

        let removed = diesel::delete(BudgetsTable::table)
            .filter(id.eq(budget_id))
            .filter(user_id.eq(owner_id))
            .execute(self.conn)?;

        Ok(removed)
    }
}
