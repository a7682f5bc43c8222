//! History command implementation

use anyhow::Result;
use ll_journal::AppliedScript;

use crate::cli::{GlobalArgs, ListArgs, ListOutput};
use crate::commands::common::open_journal;

/// Execute the history command
pub(crate) fn execute(args: &ListArgs, global: &GlobalArgs) -> Result<()> {
    let journal = open_journal(global)?;
    let rows = journal.applied_scripts()?;

    match args.output {
        ListOutput::Table => print!("{}", format_table(&rows)),
        ListOutput::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

/// Render rows as an aligned text table.
fn format_table(rows: &[AppliedScript]) -> String {
    if rows.is_empty() {
        return "No scripts have been applied.\n".to_string();
    }

    let id_width = rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = format!("{:>id_width$}  {:<19}  SCRIPT\n", "ID", "APPLIED AT");
    for row in rows {
        out.push_str(&format!(
            "{:>id_width$}  {}  {}\n",
            row.id,
            row.applied_at.format("%Y-%m-%d %H:%M:%S"),
            row.script_name
        ));
    }
    out
}
