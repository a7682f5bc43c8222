//! Status command implementation

use anyhow::Result;
use ll_journal::TableState;

use crate::cli::GlobalArgs;
use crate::commands::common::open_journal;

/// Execute the status command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let journal = open_journal(global)?;
    println!("Ledger table: {}", journal.qualified_table());

    match journal.table_state() {
        TableState::Present => {
            let count = journal.get_executed_scripts()?.len();
            println!("Status: present, {count} script(s) recorded");
        }
        TableState::Absent => println!("Status: absent (version 0)"),
        TableState::ProbeFailed(e) => {
            println!("Status: unreadable");
            return Err(e.into());
        }
    }
    Ok(())
}
