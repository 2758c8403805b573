use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expenses::db_types::ExpenseRecord;
use crate::utils::commons::parse_calendar_date;
use crate::utils::errors::TrackerResult;

/// Raw filter criteria as received from a caller. Dates stay strings until
/// the scope is resolved so that malformed input becomes a validation error.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    #[serde(alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(alias = "endDate")]
    pub end_date: Option<String>,
}

/// Which owner-scoped lookup a filter resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseScope {
    All,
    Category(String),
    DateRange { start: NaiveDate, end: NaiveDate },
    CategoryInRange { category: String, start: NaiveDate, end: NaiveDate },
}

impl ExpenseScope {
    /// Resolves filter criteria with a fixed precedence: category plus both
    /// dates, then category alone, then both dates, then everything. A
    /// category with a single date bound is treated as category only.
    pub fn resolve(filter: &ExpenseFilter) -> TrackerResult<Self> {
        let start = filter
            .start_date
            .as_deref()
            .map(|raw| parse_calendar_date(raw, "start_date"))
            .transpose()?;
        let end = filter
            .end_date
            .as_deref()
            .map(|raw| parse_calendar_date(raw, "end_date"))
            .transpose()?;

        let scope = match (&filter.category, start, end) {
            (Some(category), Some(start), Some(end)) => ExpenseScope::CategoryInRange {
                category: category.clone(),
                start,
                end,
            },
            (Some(category), _, _) => ExpenseScope::Category(category.clone()),
            (None, Some(start), Some(end)) => ExpenseScope::DateRange { start, end },
            _ => ExpenseScope::All,
        };

        Ok(scope)
    }

    /// Both date bounds are inclusive.
    pub fn matches(&self, expense: &ExpenseRecord) -> bool {
        match self {
            ExpenseScope::All => true,
            ExpenseScope::Category(category) => &expense.category == category,
            ExpenseScope::DateRange { start, end } => expense.date >= *start && expense.date <= *end,
            ExpenseScope::CategoryInRange { category, start, end } => {
                &expense.category == category && expense.date >= *start && expense.date <= *end
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::TrackerError;

    fn filter(category: Option<&str>, start: Option<&str>, end: Option<&str>) -> ExpenseFilter {
        ExpenseFilter {
            category: category.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_category_and_full_range() {
        let scope = ExpenseScope::resolve(&filter(Some("food"), Some("2024-01-01"), Some("2024-01-31"))).unwrap();
        assert_eq!(
            scope,
            ExpenseScope::CategoryInRange {
                category: "food".to_string(),
                start: day(1),
                end: day(31)
            }
        );
    }

    #[test]
    fn test_category_with_partial_range_is_category_only() {
        let with_start = ExpenseScope::resolve(&filter(Some("food"), Some("2024-01-01"), None)).unwrap();
        let with_end = ExpenseScope::resolve(&filter(Some("food"), None, Some("2024-01-31"))).unwrap();
        let bare = ExpenseScope::resolve(&filter(Some("food"), None, None)).unwrap();

        assert_eq!(bare, ExpenseScope::Category("food".to_string()));
        assert_eq!(with_start, bare);
        assert_eq!(with_end, bare);
    }

    #[test]
    fn test_range_without_category() {
        let scope = ExpenseScope::resolve(&filter(None, Some("2024-01-01"), Some("2024-01-15"))).unwrap();
        assert_eq!(scope, ExpenseScope::DateRange { start: day(1), end: day(15) });
    }

    #[test]
    fn test_single_bound_without_category_is_everything() {
        assert_eq!(ExpenseScope::resolve(&filter(None, Some("2024-01-01"), None)).unwrap(), ExpenseScope::All);
        assert_eq!(ExpenseScope::resolve(&filter(None, None, None)).unwrap(), ExpenseScope::All);
    }

    #[test]
    fn test_malformed_date_is_validation_error() {
        let err = ExpenseScope::resolve(&filter(None, Some("yesterday"), Some("2024-01-15"))).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let scope = ExpenseScope::DateRange { start: day(1), end: day(31) };
        let mut expense = ExpenseRecord {
            id: 1,
            user_id: 1,
            title: String::new(),
            amount: bigdecimal::BigDecimal::from(1),
            date: day(1),
            category: "food".to_string(),
            description: None,
        };
        assert!(scope.matches(&expense));
        expense.date = day(31);
        assert!(scope.matches(&expense));
        expense.date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(!scope.matches(&expense));
    }

    #[test]
    fn test_camel_case_query_aliases() {
        let parsed: ExpenseFilter =
            serde_json::from_str(r#"{"category": "food", "startDate": "2024-01-01", "endDate": "2024-01-31"}"#).unwrap();
        assert_eq!(parsed.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(parsed.end_date.as_deref(), Some("2024-01-31"));
    }
}
