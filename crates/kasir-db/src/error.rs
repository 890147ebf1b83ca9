//! # Database Error Types
//!
//! What can go wrong talking to the catalogue store.
//!
//! ```text
//!   sqlx::Error ──► DbError ──► services (untouched) ──► ApiError (apps/api)
//! ```
//!
//! Repositories raise `NotFound` themselves so the message can name the
//! entity and id; everything else is classified from the sqlx error.

use thiserror::Error;

/// Message clients see when a product references a missing category.
pub const MISSING_CATEGORY: &str = "Referenced category does not exist";

/// Catalogue store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A lookup matched no row, or an update/delete affected none.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// `products.category_id` names a category that is not there.
    ///
    /// `detail` keeps SQLite's own wording for the logs.
    #[error("{}", MISSING_CATEGORY)]
    ForeignKeyViolation { detail: String },

    /// Pool could not be opened, or was already closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Embedded migrations could not be applied.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected or failed a statement.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Every connection stayed busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that fits none of the above.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            // SQLite reports every FK failure as "FOREIGN KEY constraint failed";
            // the only foreign key in the schema is products.category_id.
            sqlx::Error::Database(db_err)
                if db_err.is_foreign_key_violation()
                    || db_err.message().contains("FOREIGN KEY constraint failed") =>
            {
                DbError::ForeignKeyViolation {
                    detail: db_err.message().to_string(),
                }
            }
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_entity_and_id() {
        let err = DbError::not_found("Product", "999");

        assert_eq!(err.to_string(), "Product not found: 999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_foreign_key_message_hides_sqlite_wording() {
        let err = DbError::ForeignKeyViolation {
            detail: "FOREIGN KEY constraint failed".to_string(),
        };

        assert_eq!(err.to_string(), MISSING_CATEGORY);
    }

    #[test]
    fn test_closed_and_busy_pools() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));

        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
