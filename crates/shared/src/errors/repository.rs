use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const NOT_NULL_VIOLATION: &str = "23502";
const NUMERIC_OUT_OF_RANGE: &str = "22003";
const INVALID_DATETIME_FORMAT: &str = "22007";
const DATETIME_FIELD_OVERFLOW: &str = "22008";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// A value the database refused: a failed cast or a violated `CHECK`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient stock")]
    InsufficientStock,

    /// The order already holds items drawn from its store's stock.
    #[error("order has items, its store cannot change")]
    OrderHasItems,

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps constraint violations and rejected values reported by postgres
    /// onto dedicated variants, everything else stays a raw sqlx error.
    pub fn classify(err: SqlxError) -> Self {
        if let Some(db_err) = err.as_database_error()
            && let Some(code) = db_err.code()
            && let Some(mapped) = Self::from_sqlstate(&code, db_err.message())
        {
            return mapped;
        }

        RepositoryError::Sqlx(err)
    }

    fn from_sqlstate(code: &str, message: &str) -> Option<Self> {
        let message = message.to_string();
        match code {
            UNIQUE_VIOLATION => Some(RepositoryError::AlreadyExists(message)),
            FOREIGN_KEY_VIOLATION => Some(RepositoryError::ForeignKey(message)),
            CHECK_VIOLATION
            | NOT_NULL_VIOLATION
            | NUMERIC_OUT_OF_RANGE
            | INVALID_DATETIME_FORMAT
            | DATETIME_FIELD_OVERFLOW
            | INVALID_TEXT_REPRESENTATION => Some(RepositoryError::InvalidInput(message)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_keeps_non_database_errors() {
        let err = RepositoryError::classify(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::Sqlx(SqlxError::RowNotFound)));
    }

    #[test]
    fn rejected_values_are_invalid_input() {
        for code in ["23514", "23502", "22003", "22007", "22008", "22P02"] {
            let err = RepositoryError::from_sqlstate(code, "bad value");
            assert!(
                matches!(&err, Some(RepositoryError::InvalidInput(msg)) if msg == "bad value"),
                "{code} -> {err:?}"
            );
        }
    }

    #[test]
    fn key_violations_keep_their_variants() {
        assert!(matches!(
            RepositoryError::from_sqlstate("23505", "dup"),
            Some(RepositoryError::AlreadyExists(_))
        ));
        assert!(matches!(
            RepositoryError::from_sqlstate("23503", "fk"),
            Some(RepositoryError::ForeignKey(_))
        ));
        assert!(RepositoryError::from_sqlstate("40001", "serialization").is_none());
    }
}
