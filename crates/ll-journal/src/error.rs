//! Error types for the journal.

use ll_core::CoreError;
use ll_db::DbError;
use thiserror::Error;

/// Journal errors.
#[derive(Error, Debug)]
pub enum JournalError {
    /// The ledger table name was empty (J001).
    #[error("[J001] Ledger table name must not be empty")]
    InvalidTableName,

    /// The script name was rejected before touching the database (J002).
    #[error("[J002] {0}")]
    InvalidScriptName(#[from] CoreError),

    /// The existence probe failed for a reason other than a missing table (J003).
    #[error("[J003] Could not determine whether {table} exists: {source}")]
    Probe { table: String, source: DbError },

    /// Creating the ledger table failed (J004).
    #[error("[J004] Failed to create ledger table {table}: {source}")]
    CreateTable { table: String, source: DbError },

    /// Reading applied scripts failed after the table was found (J005).
    #[error("[J005] Failed to read applied scripts from {table}: {source}")]
    ReadScripts { table: String, source: DbError },

    /// The script was executed but its record did not persist (J006).
    #[error("[J006] Script '{script}' ran but could not be recorded: {source}")]
    RecordScript { script: String, source: DbError },
}

/// Result type alias for [`JournalError`].
pub type JournalResult<T> = Result<T, JournalError>;
