use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::budgets as BudgetsTable;
use crate::utils::commons::{validate_label, validate_money};
use crate::utils::errors::{TrackerError, TrackerResult};

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = BudgetsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BudgetRecord {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = BudgetsTable)]
pub struct CreateBudget {
    pub user_id: i64,
    pub category: String,
    pub amount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = BudgetsTable)]
#[diesel(treat_none_as_null = true)]
pub struct BudgetChanges {
    pub category: String,
    pub amount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

impl BudgetChanges {
    pub fn for_owner(self, owner_id: i64) -> CreateBudget {
        CreateBudget {
            user_id: owner_id,
            category: self.category,
            amount: self.amount,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BudgetInput {
    #[serde(default)]
    pub category: String,
    pub amount: Option<BigDecimal>,
    #[serde(alias = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(alias = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl BudgetInput {
    pub fn to_changes(&self) -> TrackerResult<BudgetChanges> {
        let amount = match &self.amount {
            Some(amount) if amount > &BigDecimal::from(0) => amount.clone(),
            _ => return Err(TrackerError::validation("Budget amount must be greater than 0")),
        };
        validate_money(&amount, "Budget amount")?;
        validate_label(&self.category, "Category")?;

        let (start_date, end_date) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(TrackerError::validation("Start date and end date are required")),
        };

        if start_date > end_date {
            return Err(TrackerError::validation("Start date must not be after end date"));
        }

        Ok(BudgetChanges {
            category: self.category.clone(),
            amount,
            start_date,
            end_date,
            description: self.description.clone(),
        })
    }
}
