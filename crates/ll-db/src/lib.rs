//! ll-db - Connection providers for Ledgerline
//!
//! This crate provides the `ConnectionProvider` trait the journal uses to
//! obtain a fresh connection per unit of work, and a DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod provider;

pub use crate::duckdb::DuckDbProvider;
pub use error::{DbError, DbResult};
pub use provider::ConnectionProvider;
