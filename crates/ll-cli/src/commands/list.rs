//! List command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, ListArgs, ListOutput};
use crate::commands::common::open_journal;

/// Execute the list command
pub(crate) fn execute(args: &ListArgs, global: &GlobalArgs) -> Result<()> {
    let journal = open_journal(global)?;
    let scripts = journal.get_executed_scripts()?;

    match args.output {
        ListOutput::Table => {
            if scripts.is_empty() {
                println!("No scripts have been applied.");
            }
            for script in &scripts {
                println!("{script}");
            }
        }
        ListOutput::Json => println!("{}", serde_json::to_string_pretty(&scripts)?),
    }
    Ok(())
}
