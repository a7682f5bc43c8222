//! ll-core - Core library for Ledgerline
//!
//! This crate provides shared types, configuration parsing, and SQL
//! identifier quoting used across all Ledgerline components.

pub mod config;
pub mod error;
pub mod script_name;
pub mod sql_utils;

pub use config::{Config, DatabaseConfig, JournalConfig};
pub use error::{CoreError, CoreResult};
pub use script_name::ScriptName;
