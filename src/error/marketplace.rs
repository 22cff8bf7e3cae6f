use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

use super::IsConstraintViolation;
use crate::db::EntityKind;

#[derive(Debug, ThisError)]
pub enum MarketplaceError {
    #[error("Unique constraint violated: {message}")]
    UniqueViolation { message: String },

    #[error("Foreign key constraint violated: {message}")]
    ForeignKeyViolation { message: String },

    #[error("NOT NULL constraint violated: {message}")]
    NotNullViolation { message: String },

    #[error("{entity} not found for id={id}")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for MarketplaceError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => Some((db_err.kind(), db_err.message().to_string())),
            _ => None,
        };

        match kind {
            Some((ErrorKind::UniqueViolation, message)) => {
                MarketplaceError::UniqueViolation { message }
            }
            Some((ErrorKind::ForeignKeyViolation, message)) => {
                MarketplaceError::ForeignKeyViolation { message }
            }
            Some((ErrorKind::NotNullViolation, message)) => {
                MarketplaceError::NotNullViolation { message }
            }
            _ => MarketplaceError::DatabaseError(err),
        }
    }
}

impl IsConstraintViolation for MarketplaceError {
    fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            MarketplaceError::UniqueViolation { .. }
                | MarketplaceError::ForeignKeyViolation { .. }
                | MarketplaceError::NotNullViolation { .. }
        )
    }
}
