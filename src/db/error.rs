use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// Constraint violations are split out from generic database failures so
/// callers can map them to meaningful responses instead of opaque 500s.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not connected, call connect() first")]
    NotConnected,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => Self::Database(err),
        }
    }
}
