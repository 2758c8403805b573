use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::expenses as ExpensesTable;
use crate::utils::commons::{validate_label, validate_money};
use crate::utils::errors::{TrackerError, TrackerResult};

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub amount: BigDecimal,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
pub struct CreateExpense {
    pub user_id: i64,
    pub title: String,
    pub amount: BigDecimal,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
}

/// Every mutable column of an expense. Updates always write all of them,
/// so a missing description clears the stored one.
#[derive(AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChanges {
    pub title: String,
    pub amount: BigDecimal,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
}

impl ExpenseChanges {
    pub fn for_owner(self, owner_id: i64) -> CreateExpense {
        CreateExpense {
            user_id: owner_id,
            title: self.title,
            amount: self.amount,
            date: self.date,
            category: self.category,
            description: self.description,
        }
    }
}

/// Expense fields as a caller sends them. Any owner the caller supplies is
/// ignored; ownership always comes from the authenticated user.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExpenseInput {
    #[serde(default)]
    pub title: String,
    pub amount: Option<BigDecimal>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
}

impl ExpenseInput {
    pub fn to_changes(&self) -> TrackerResult<ExpenseChanges> {
        let amount = match &self.amount {
            Some(amount) if amount > &BigDecimal::from(0) => amount.clone(),
            _ => return Err(TrackerError::validation("Expense amount must be greater than 0")),
        };
        validate_money(&amount, "Expense amount")?;
        validate_label(&self.title, "Title")?;
        validate_label(&self.category, "Category")?;

        let date = self
            .date
            .ok_or_else(|| TrackerError::validation("Date is required"))?;

        Ok(ExpenseChanges {
            title: self.title.clone(),
            amount,
            date,
            category: self.category.clone(),
            description: self.description.clone(),
        })
    }
}
