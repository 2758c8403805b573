// Shared helpers for the interactive admin CLI
pub mod menu;
pub mod input;
pub mod formatting;

pub use menu::Menu;
pub use input::Input;
pub use formatting::{format_table, format_json, format_record};

use colored::Colorize;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Operation cancelled by user")]
    UserCancelled,
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

/// Confirm a dangerous operation
pub fn confirm(message: &str) -> CliResult<bool> {
    let answer = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;

    Ok(answer)
}

pub fn print_success(message: &str) {
    eprintln!("{}", format!("✓ {}", message).green());
}

pub fn print_info(message: &str) {
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

pub fn print_warning(message: &str) {
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("✗ {}", message).red());
}
