//! The applied-script journal.
//!
//! Every public operation is a self-contained unit of work: it asks the
//! [`ConnectionProvider`] for a fresh connection per step (probe, create,
//! read, insert) and drops it before the next step. Nothing about the
//! ledger table is cached between calls.

use crate::error::{JournalError, JournalResult};
use crate::log_sink::LogSink;
use crate::record::AppliedScript;
use chrono::{NaiveDateTime, Timelike, Utc};
use ll_core::sql_utils::{plain_ident, quote_ident, quote_literal, quote_qualified};
use ll_core::{JournalConfig, ScriptName};
use ll_db::{ConnectionProvider, DbError, DbResult};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Attempts at creating the ledger table while other writers hold
/// conflicting catalog changes.
const CREATE_ATTEMPTS: u32 = 8;

/// Pause before the second creation attempt; doubles on each retry.
const CREATE_BACKOFF: Duration = Duration::from_millis(5);

/// Result of probing for the ledger table.
#[derive(Debug)]
pub enum TableState {
    /// The table exists and is readable.
    Present,
    /// The table (or its schema) does not exist.
    Absent,
    /// The probe itself failed; existence is unknown.
    ProbeFailed(DbError),
}

impl TableState {
    pub fn is_present(&self) -> bool {
        matches!(self, TableState::Present)
    }
}

/// Ledger of migration scripts applied to one target database.
pub struct Journal {
    provider: Arc<dyn ConnectionProvider>,
    log: Arc<dyn LogSink>,
    schema: Option<String>,
    table_ident: String,
    qualified_table: String,
    sequence: String,
}

impl Journal {
    /// Create a journal for `table`, optionally inside `schema`.
    ///
    /// An empty schema is the same as no schema. Identifiers are quoted here,
    /// once, and reused for every statement.
    pub fn new(
        provider: Arc<dyn ConnectionProvider>,
        schema: Option<&str>,
        table: &str,
        log: Arc<dyn LogSink>,
    ) -> JournalResult<Self> {
        if table.is_empty() {
            return Err(JournalError::InvalidTableName);
        }
        let schema = schema.filter(|s| !s.is_empty());
        Ok(Self {
            provider,
            log,
            schema: schema.map(str::to_string),
            table_ident: quote_ident(table),
            qualified_table: quote_qualified(schema, table),
            sequence: sequence_name(schema, table),
        })
    }

    /// Create a journal placed according to `config`.
    pub fn from_config(
        provider: Arc<dyn ConnectionProvider>,
        config: &JournalConfig,
        log: Arc<dyn LogSink>,
    ) -> JournalResult<Self> {
        Self::new(provider, config.schema(), &config.table, log)
    }

    /// Quoted identifier of the table alone.
    pub fn table_ident(&self) -> &str {
        &self.table_ident
    }

    /// Quoted, schema-qualified identifier used in every statement.
    pub fn qualified_table(&self) -> &str {
        &self.qualified_table
    }

    /// Names of every recorded script, sorted lexically ascending.
    ///
    /// A missing ledger table means nothing has run yet and yields an empty
    /// list rather than an error.
    pub fn get_executed_scripts(&self) -> JournalResult<Vec<String>> {
        self.log.info("Fetching list of already executed scripts.");

        match self.table_state() {
            TableState::Present => {}
            TableState::Absent => {
                self.log_assumed_version_zero();
                return Ok(Vec::new());
            }
            TableState::ProbeFailed(source) => return Err(self.probe_error(source)),
        }

        self.read_script_names()
            .map_err(|source| JournalError::ReadScripts {
                table: self.qualified_table.clone(),
                source,
            })
    }

    /// Full ledger rows, ordered like [`get_executed_scripts`](Self::get_executed_scripts)
    /// with insertion order breaking ties between duplicate names.
    pub fn applied_scripts(&self) -> JournalResult<Vec<AppliedScript>> {
        match self.table_state() {
            TableState::Present => {}
            TableState::Absent => {
                self.log_assumed_version_zero();
                return Ok(Vec::new());
            }
            TableState::ProbeFailed(source) => return Err(self.probe_error(source)),
        }

        self.read_rows().map_err(|source| JournalError::ReadScripts {
            table: self.qualified_table.clone(),
            source,
        })
    }

    /// Record that `script_name` has been applied, creating the ledger
    /// table first if it does not exist.
    ///
    /// Duplicate names are stored as separate rows.
    pub fn store_executed_script(&self, script_name: &str) -> JournalResult<()> {
        let script = ScriptName::parse(script_name)?;

        match self.table_state() {
            TableState::Present => {}
            TableState::Absent => self.ensure_table()?,
            TableState::ProbeFailed(source) => return Err(self.probe_error(source)),
        }

        let applied_at = Utc::now().naive_utc();
        self.insert(&script, applied_at)
            .map_err(|source| JournalError::RecordScript {
                script: script.into_inner(),
                source,
            })
    }

    /// Probe for the ledger table on a connection opened only for the probe.
    pub fn table_state(&self) -> TableState {
        let conn = match self.provider.connect() {
            Ok(conn) => conn,
            Err(e) => return TableState::ProbeFailed(e),
        };
        let sql = format!("SELECT COUNT(*) FROM {}", self.qualified_table);
        match conn.query_row(&sql, [], |row| row.get::<_, i64>(0)) {
            Ok(_) => TableState::Present,
            Err(e) => {
                let err = DbError::from(e);
                if err.is_missing_relation() {
                    TableState::Absent
                } else {
                    TableState::ProbeFailed(err)
                }
            }
        }
    }

    fn log_assumed_version_zero(&self) {
        self.log.info(&format!(
            "The {} table could not be found. The database is assumed to be at version 0.",
            self.qualified_table
        ));
    }

    fn probe_error(&self, source: DbError) -> JournalError {
        JournalError::Probe {
            table: self.qualified_table.clone(),
            source,
        }
    }

    fn ensure_table(&self) -> JournalResult<()> {
        self.log
            .info(&format!("Creating the {} table", self.qualified_table));

        let mut backoff = CREATE_BACKOFF;
        let mut attempt = 1;
        loop {
            let source = match self.create_table() {
                Ok(()) => {
                    self.log.info(&format!(
                        "The {} table has been created",
                        self.qualified_table
                    ));
                    return Ok(());
                }
                Err(source) => source,
            };

            if self.table_state().is_present() {
                log::debug!(
                    "Creating {} failed but the table now exists: {source}",
                    self.qualified_table
                );
                self.log.info(&format!(
                    "The {} table was created by another runner",
                    self.qualified_table
                ));
                return Ok(());
            }

            if !source.is_conflict() || attempt >= CREATE_ATTEMPTS {
                return Err(JournalError::CreateTable {
                    table: self.qualified_table.clone(),
                    source,
                });
            }

            // The competing creator has not committed yet.
            log::debug!(
                "Creating {} conflicted (attempt {attempt} of {CREATE_ATTEMPTS}): {source}",
                self.qualified_table
            );
            std::thread::sleep(backoff);
            backoff *= 2;
            attempt += 1;
        }
    }

    fn create_table(&self) -> DbResult<()> {
        let conn = self.provider.connect()?;
        let sql = self.create_table_sql();
        log::debug!("Creating ledger table:\n{sql}");
        conn.execute_batch(&sql)?;
        Ok(())
    }

    fn create_table_sql(&self) -> String {
        let mut sql = String::new();
        if let Some(schema) = &self.schema {
            sql.push_str(&format!(
                "CREATE SCHEMA IF NOT EXISTS {};\n",
                quote_ident(schema)
            ));
        }
        sql.push_str(&format!(
            "CREATE SEQUENCE IF NOT EXISTS {seq};
CREATE TABLE IF NOT EXISTS {table} (
    \"Id\" BIGINT PRIMARY KEY DEFAULT nextval({seq_literal}),
    \"ScriptName\" VARCHAR(255) NOT NULL,
    \"AppliedAt\" TIMESTAMP NOT NULL
);",
            seq = quote_ident(&self.sequence),
            table = self.qualified_table,
            seq_literal = quote_literal(&self.sequence),
        ));
        sql
    }

    fn read_script_names(&self) -> DbResult<Vec<String>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT \"ScriptName\" FROM {} ORDER BY \"ScriptName\"",
            self.qualified_table
        ))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn read_rows(&self) -> DbResult<Vec<AppliedScript>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT \"Id\", \"ScriptName\", \"AppliedAt\" FROM {} ORDER BY \"ScriptName\", \"Id\"",
            self.qualified_table
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AppliedScript {
                    id: row.get(0)?,
                    script_name: row.get(1)?,
                    applied_at: row.get::<_, NaiveDateTime>(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn insert(&self, script: &ScriptName, applied_at: NaiveDateTime) -> DbResult<()> {
        let conn = self.provider.connect()?;
        let applied_at = applied_at.with_nanosecond(0).unwrap_or(applied_at);
        conn.execute(
            &format!(
                "INSERT INTO {} (\"ScriptName\", \"AppliedAt\") VALUES (?, CAST(? AS TIMESTAMP))",
                self.qualified_table
            ),
            duckdb::params![script.as_str(), applied_at],
        )?;
        log::debug!("Recorded {script} in {}", self.qualified_table);
        Ok(())
    }
}

/// Name of the sequence feeding `"Id"`.
///
/// It lives in the connection's default schema under a plain name, because
/// `nextval` takes the sequence as a string that DuckDB re-parses and a
/// quoted identifier does not survive that for every table name. The ledger
/// schema is folded into the name so that ledgers in different schemas
/// keep separate sequences.
fn sequence_name(schema: Option<&str>, table: &str) -> String {
    match schema {
        Some(schema) => plain_ident(&format!("{schema}_{table}_Id_seq")),
        None => plain_ident(&format!("{table}_Id_seq")),
    }
}

impl fmt::Debug for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Journal")
            .field("target", &self.provider.describe())
            .field("table", &self.qualified_table)
            .finish()
    }
}

#[cfg(test)]
#[path = "journal_test.rs"]
mod tests;
