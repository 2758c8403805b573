use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::budgets::db_types::BudgetRecord;
use crate::expenses::db_types::ExpenseRecord;

/// How much of a budget has been spent inside its window. Derived from
/// live rows on every request, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: BudgetRecord,
    pub total_spent: BigDecimal,
    /// Negative when the budget is overspent.
    pub remaining: BigDecimal,
    pub percentage_used: f64,
    pub expenses: Vec<ExpenseRecord>,
}

impl BudgetStatus {
    /// `expenses` must already be limited to the budget's owner, category
    /// and window.
    pub fn compute(budget: BudgetRecord, expenses: Vec<ExpenseRecord>) -> Self {
        let total_spent = expenses
            .iter()
            .fold(BigDecimal::from(0), |acc, expense| acc + &expense.amount);
        let remaining = &budget.amount - &total_spent;

        Self {
            percentage_used: percentage_of(&total_spent, &budget.amount),
            budget,
            total_spent,
            remaining,
            expenses,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.remaining < BigDecimal::from(0)
    }
}

/// Budgets are validated positive on write; a non-positive limit that
/// slipped into the table reports 0% rather than dividing by zero.
fn percentage_of(spent: &BigDecimal, limit: &BigDecimal) -> f64 {
    if limit <= &BigDecimal::from(0) {
        return 0.0;
    }
    (spent.to_f64().unwrap_or(0.0) / limit.to_f64().unwrap_or(1.0)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn budget(amount: &str) -> BudgetRecord {
        BudgetRecord {
            id: 1,
            user_id: 1,
            category: "food".to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            description: None,
        }
    }

    fn spent(id: i64, amount: &str) -> ExpenseRecord {
        ExpenseRecord {
            id,
            user_id: 1,
            title: format!("expense {}", id),
            amount: BigDecimal::from_str(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            category: "food".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_status_arithmetic() {
        let status = BudgetStatus::compute(budget("100.00"), vec![spent(1, "30.00"), spent(2, "40.00")]);

        assert_eq!(status.total_spent, BigDecimal::from_str("70.00").unwrap());
        assert_eq!(status.remaining, BigDecimal::from_str("30.00").unwrap());
        assert!((status.percentage_used - 70.0).abs() < 1e-9);
        assert_eq!(status.expenses.len(), 2);
        assert!(!status.is_exceeded());
    }

    #[test]
    fn test_overspend_goes_negative() {
        let status = BudgetStatus::compute(budget("50.00"), vec![spent(1, "30.00"), spent(2, "40.00")]);

        assert_eq!(status.remaining, BigDecimal::from_str("-20.00").unwrap());
        assert!((status.percentage_used - 140.0).abs() < 1e-9);
        assert!(status.is_exceeded());
    }

    #[test]
    fn test_no_expenses() {
        let status = BudgetStatus::compute(budget("100.00"), vec![]);

        assert_eq!(status.total_spent, BigDecimal::from(0));
        assert_eq!(status.remaining, BigDecimal::from(100));
        assert_eq!(status.percentage_used, 0.0);
    }

    #[test]
    fn test_zero_limit_does_not_divide_by_zero() {
        let status = BudgetStatus::compute(budget("0"), vec![spent(1, "5.00")]);

        assert_eq!(status.percentage_used, 0.0);
        assert!(status.is_exceeded());
    }
}
