//! Record command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, RecordArgs};
use crate::commands::common::open_journal;

/// Execute the record command
///
/// Stops at the first script that cannot be recorded; earlier ones stay
/// recorded.
pub(crate) fn execute(args: &RecordArgs, global: &GlobalArgs) -> Result<()> {
    let journal = open_journal(global)?;

    for script in &args.scripts {
        journal
            .store_executed_script(script)
            .with_context(|| format!("Failed to record '{script}'"))?;
        println!("Recorded {script}");
    }
    Ok(())
}
