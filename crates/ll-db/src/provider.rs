//! Connection provider trait

use crate::error::DbResult;
use duckdb::Connection;

/// Factory for fresh database connections.
///
/// The caller owns every connection it receives: it is opened by
/// [`connect`](ConnectionProvider::connect) and closed when dropped. Pooling,
/// retries and timeouts, if any, live behind this trait.
pub trait ConnectionProvider: Send + Sync {
    /// Open a new connection to the target database
    fn connect(&self) -> DbResult<Connection>;

    /// Human-readable description of the target, for messages
    fn describe(&self) -> String {
        "custom connection factory".to_string()
    }
}

impl<F> ConnectionProvider for F
where
    F: Fn() -> DbResult<Connection> + Send + Sync,
{
    fn connect(&self) -> DbResult<Connection> {
        self()
    }
}
