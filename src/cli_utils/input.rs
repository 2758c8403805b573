use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dialoguer::Input as DialoguerInput;

use crate::cli_utils::{CliError, CliResult};
use crate::utils::commons::parse_calendar_date;

/// Prompt helpers over dialoguer
pub struct Input;

impl Input {
    pub fn get_string(prompt: &str) -> CliResult<String> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        Ok(input.trim().to_string())
    }

    /// Empty input becomes `None`
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(non_empty(&input))
    }

    pub fn get_i64(prompt: &str) -> CliResult<i64> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        input
            .trim()
            .parse::<i64>()
            .map_err(|_| CliError::ValidationError("Invalid number format".to_string()))
    }

    pub fn get_decimal(prompt: &str) -> CliResult<BigDecimal> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        parse_decimal(&input)
    }

    /// Calendar date as YYYY-MM-DD
    pub fn get_date(prompt: &str) -> CliResult<NaiveDate> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
            .interact_text()?;

        parse_calendar_date(input.trim(), prompt).map_err(|e| CliError::ValidationError(e.to_string()))
    }
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn parse_decimal(input: &str) -> CliResult<BigDecimal> {
    BigDecimal::from_str(input.trim())
        .map_err(|_| CliError::ValidationError("Invalid decimal format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_is_none() {
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(" lunch "), Some("lunch".to_string()));
    }

    #[test]
    fn test_decimal_parsing() {
        assert_eq!(parse_decimal(" 12.50 ").unwrap(), BigDecimal::from_str("12.5").unwrap());
        assert!(matches!(parse_decimal("twelve"), Err(CliError::ValidationError(_))));
    }
}
