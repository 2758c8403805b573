use serde::{Deserialize, Serialize};

use crate::users::db_types::{CreateUser, UserRecord};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum UsersProcessorInput {
    /// Maps the username handed over by the auth boundary to a stored user.
    ResolvePrincipal(String),
    CreateUser(CreateUser),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum UsersProcessorOutput {
    ResolvePrincipal(UserRecord),
    CreateUser(UserRecord),
}
