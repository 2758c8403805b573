use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::users as UsersTable;

/// A registered user. The credential is opaque to this service and never
/// leaves it in a response body.
#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = UsersTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub credential: String,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = UsersTable)]
pub struct CreateUser {
    pub username: String,
    pub credential: String,
}
