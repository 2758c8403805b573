use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failure kinds surfaced by the expense and budget processors.
///
/// `NotFound` deliberately covers both "no such record" and "record owned by
/// someone else" so callers cannot probe for other users' ids.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("store failure: {0}")]
    Store(String),
}

impl TrackerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl From<DieselError> for TrackerError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => TrackerError::not_found("Record"),
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                TrackerError::validation(info.message().to_string())
            }
            other => TrackerError::store(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for TrackerError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        TrackerError::store(format!("unable to get connection: {}", err))
    }
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
