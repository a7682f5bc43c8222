//! Applied-script ledger for Ledgerline.
//!
//! A [`Journal`] records which migration scripts have run against a target
//! database and reports them back in lexical order, creating its ledger
//! table on the first write.

pub mod error;
pub mod journal;
pub mod log_sink;
pub mod record;

pub use error::{JournalError, JournalResult};
pub use journal::{Journal, TableState};
pub use log_sink::{CapturingSink, LogFacadeSink, LogSink, StderrSink};
pub use record::AppliedScript;
