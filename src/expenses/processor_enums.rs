use serde::{Deserialize, Serialize};

use crate::expenses::db_types::{ExpenseInput, ExpenseRecord};
use crate::expenses::filters::ExpenseFilter;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateExpenseInputArgs {
    pub expense_id: i64,
    pub expense: ExpenseInput,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ExpensesProcessorInput {
    CreateExpense(ExpenseInput),
    GetExpense(i64),
    GetExpenses,
    UpdateExpense(UpdateExpenseInputArgs),
    DeleteExpense(i64),
    FilterExpenses(ExpenseFilter),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorOutput {
    CreateExpense(ExpenseRecord),
    GetExpense(ExpenseRecord),
    GetExpenses(Vec<ExpenseRecord>),
    UpdateExpense(ExpenseRecord),
    DeleteExpense,
    FilterExpenses(Vec<ExpenseRecord>),
}
