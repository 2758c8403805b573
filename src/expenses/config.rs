use crate::users::db_types::UserRecord;

/// Per-request context for expense actions: the already resolved owner.
#[derive(Clone, Debug)]
pub struct ExpenseProcessorConfig {
    pub owner: UserRecord,
}
