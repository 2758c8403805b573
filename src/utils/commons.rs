use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

use crate::utils::errors::{TrackerError, TrackerResult};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Money columns are `NUMERIC(12,2)`.
pub const MONEY_SCALE: i64 = 2;
pub const MONEY_INTEGER_DIGITS: u32 = 10;
/// Title and category columns are `VARCHAR(255)`.
pub const MAX_LABEL_CHARS: usize = 255;

/// Rejects amounts the money columns cannot store exactly.
pub fn validate_money(amount: &BigDecimal, field_name: &str) -> TrackerResult<()> {
    let (_, scale) = amount.normalized().as_bigint_and_exponent();
    if scale > MONEY_SCALE {
        return Err(TrackerError::validation(format!(
            "{} must have at most {} decimal places",
            field_name, MONEY_SCALE
        )));
    }

    let ceiling = BigDecimal::from(10_i64.pow(MONEY_INTEGER_DIGITS));
    if amount.abs() >= ceiling {
        return Err(TrackerError::validation(format!(
            "{} must be less than {}",
            field_name, ceiling
        )));
    }

    Ok(())
}

pub fn validate_label(value: &str, field_name: &str) -> TrackerResult<()> {
    if value.chars().count() > MAX_LABEL_CHARS {
        return Err(TrackerError::validation(format!(
            "{} must be at most {} characters",
            field_name, MAX_LABEL_CHARS
        )));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date supplied by a caller.
pub fn parse_calendar_date(value: &str, field_name: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        TrackerError::validation(format!(
            "{} '{}' is not a valid date, expected YYYY-MM-DD",
            field_name, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        let date = parse_calendar_date("2024-01-31", "start_date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_calendar_date_rejects_garbage() {
        let err = parse_calendar_date("31/01/2024", "end_date").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn test_money_limits() {
        use std::str::FromStr;
        let money = |raw: &str| BigDecimal::from_str(raw).unwrap();

        assert!(validate_money(&money("9999999999.99"), "Amount").is_ok());
        assert!(validate_money(&money("12.50"), "Amount").is_ok());
        assert!(validate_money(&money("12.500"), "Amount").is_ok());
        assert!(validate_money(&money("100"), "Amount").is_ok());

        let too_big = validate_money(&money("10000000000"), "Amount").unwrap_err();
        assert!(matches!(too_big, TrackerError::Validation(_)));
        let too_precise = validate_money(&money("0.999"), "Amount").unwrap_err();
        assert_eq!(too_precise.to_string(), "Amount must have at most 2 decimal places");
    }

    #[test]
    fn test_label_limit_counts_characters() {
        assert!(validate_label(&"x".repeat(255), "Title").is_ok());
        assert!(validate_label(&"é".repeat(255), "Title").is_ok());
        assert!(matches!(
            validate_label(&"x".repeat(256), "Title"),
            Err(TrackerError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_calendar_date_rejects_impossible_dates() {
        assert!(parse_calendar_date("2024-02-30", "start_date").is_err());
    }
}
