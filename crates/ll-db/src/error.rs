//! Error types for ll-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table or view not found: {0}")]
    TableNotFound(String),

    /// Schema not found (D004)
    #[error("[D004] Schema not found: {0}")]
    SchemaNotFound(String),

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Concurrent transaction touched the same catalog entry or row (D006)
    #[error("[D006] Transaction conflict: {0}")]
    Conflict(String),
}

impl DbError {
    /// True when the error means the referenced relation is missing,
    /// either directly or because its schema is.
    pub fn is_missing_relation(&self) -> bool {
        matches!(self, DbError::TableNotFound(_) | DbError::SchemaNotFound(_))
    }

    /// True when another transaction got there first and the statement may
    /// succeed if repeated.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict(_))
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error does not expose structured catalog variants, so the
        // message is the only signal. Patterns require a "missing" phrase so
        // that "already exists" catalog errors stay execution errors.
        let msg = err.to_string();
        if msg.contains("write-write conflict") || msg.contains("Conflict on") {
            return DbError::Conflict(msg);
        }
        let missing = msg.contains("does not exist") || msg.contains("not found");
        if missing && msg.contains("Schema with name") {
            DbError::SchemaNotFound(msg)
        } else if missing
            && (msg.contains("Table with name")
                || msg.contains("View with name")
                || msg.contains("Table or view with name")
                || (msg.contains("Catalog Error") && msg.contains("Table")))
        {
            DbError::TableNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}
