//! DuckDB connection provider implementation

use crate::error::{DbError, DbResult};
use crate::provider::ConnectionProvider;
use duckdb::Connection;
use std::path::Path;
use std::sync::Mutex;

/// Path string that selects an in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// DuckDB connection provider
///
/// Holds one root connection to the database instance and hands out
/// independent connections cloned from it. Every handed-out connection sees
/// the same database, which is what makes `:memory:` usable across
/// connections and avoids reopening (and relocking) a file per operation.
pub struct DuckDbProvider {
    root: Mutex<Connection>,
    target: String,
}

impl DuckDbProvider {
    /// Create a provider over a new in-memory DuckDB database
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            root: Mutex::new(conn),
            target: MEMORY_PATH.to_string(),
        })
    }

    /// Create a provider over a DuckDB database file, creating it if missing
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            root: Mutex::new(conn),
            target: path.display().to_string(),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == MEMORY_PATH {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }
}

impl ConnectionProvider for DuckDbProvider {
    fn connect(&self) -> DbResult<Connection> {
        let root = self
            .root
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        log::debug!("Opening connection to {}", self.target);
        root.try_clone()
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", self.target)))
    }

    fn describe(&self) -> String {
        format!("duckdb ({})", self.target)
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
