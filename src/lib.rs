// Public library interface for expense-tracker-back-end
pub mod action_router;
pub mod api;
pub mod budgets;
pub mod cli_helper;
pub mod cli_utils;
pub mod expenses;
pub mod schema;
pub mod store;
pub mod users;
pub mod utils;
