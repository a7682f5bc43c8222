//! Full ledger rows.

use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the ledger table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedScript {
    /// Store-assigned surrogate key, increasing with insertion order
    pub id: i64,
    pub script_name: String,
    /// UTC, whole seconds
    pub applied_at: NaiveDateTime,
}
