use serde::{Deserialize, Serialize};

use crate::budgets::db_types::{BudgetInput, BudgetRecord};
use crate::budgets::status::BudgetStatus;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateBudgetInputArgs {
    pub budget_id: i64,
    pub budget: BudgetInput,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetsProcessorInput {
    CreateBudget(BudgetInput),
    GetBudgets,
    UpdateBudget(UpdateBudgetInputArgs),
    DeleteBudget(i64),
    /// Status of the owner's budget for the given category.
    GetBudgetStatus(String),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum BudgetsProcessorOutput {
    CreateBudget(BudgetRecord),
    GetBudgets(Vec<BudgetRecord>),
    UpdateBudget(BudgetRecord),
    DeleteBudget,
    GetBudgetStatus(BudgetStatus),
}
