use crate::users::db_types::UserRecord;

#[derive(Clone, Debug)]
pub struct BudgetProcessorConfig {
    pub owner: UserRecord,
}
