use super::*;
use crate::cli::{ListArgs, ListOutput, RecordArgs};
use crate::commands::{history, list, record, status};
use ll_journal::CapturingSink;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn global_for(project_dir: PathBuf) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir,
        config: None,
        database: None,
    }
}

fn write_config(dir: &Path, body: &str) {
    fs::write(dir.join("ledgerline.yml"), body).unwrap();
}

/// Read the ledger back through a fresh journal after the command released the file.
fn recorded(dir: &Path, schema: Option<&str>) -> Vec<String> {
    let provider = DuckDbProvider::from_path(&dir.join("target.duckdb")).unwrap();
    Journal::new(
        Arc::new(provider),
        schema,
        "SchemaVersions",
        Arc::new(CapturingSink::new()),
    )
    .unwrap()
    .get_executed_scripts()
    .unwrap()
}

#[test]
fn test_load_config_from_project_dir() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "database:\n  path: target.duckdb\njournal:\n  schema: ops\n",
    );
    let config = load_config(&global_for(dir.path().to_path_buf())).unwrap();
    assert_eq!(config.database.path, "target.duckdb");
    assert_eq!(config.journal.schema(), Some("ops"));
}

#[test]
fn test_load_config_missing_without_database_override() {
    let dir = tempdir().unwrap();
    let err = load_config(&global_for(dir.path().to_path_buf())).unwrap_err();
    assert!(format!("{err:#}").contains("Config file not found"));
}

#[test]
fn test_load_config_database_override_without_file() {
    let dir = tempdir().unwrap();
    let mut global = global_for(dir.path().to_path_buf());
    global.database = Some("other.duckdb".to_string());
    let config = load_config(&global).unwrap();
    assert_eq!(config.database.path, "other.duckdb");
    assert_eq!(config.journal.table, "SchemaVersions");
}

#[test]
fn test_load_config_explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let mut global = global_for(dir.path().to_path_buf());
    global.config = Some(dir.path().join("missing.yml"));
    global.database = Some("other.duckdb".to_string());
    assert!(load_config(&global).is_err());
}

#[test]
fn test_resolve_db_path() {
    let root = Path::new("/srv/project");
    assert_eq!(resolve_db_path(root, ":memory:"), ":memory:");
    assert_eq!(resolve_db_path(root, "/abs/db.duckdb"), "/abs/db.duckdb");
    assert_eq!(
        resolve_db_path(root, "db.duckdb"),
        root.join("db.duckdb").display().to_string()
    );
}

#[test]
fn test_record_then_list() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "database:\n  path: target.duckdb\n");
    let global = global_for(dir.path().to_path_buf());

    list::execute(&ListArgs { output: ListOutput::Table }, &global).unwrap();
    record::execute(
        &RecordArgs {
            scripts: vec!["002_b.sql".to_string(), "001_a.sql".to_string()],
        },
        &global,
    )
    .unwrap();
    list::execute(&ListArgs { output: ListOutput::Json }, &global).unwrap();
    history::execute(&ListArgs { output: ListOutput::Table }, &global).unwrap();
    status::execute(&global).unwrap();

    assert_eq!(recorded(dir.path(), None), vec!["001_a.sql", "002_b.sql"]);
}

#[test]
fn test_record_stops_at_invalid_name() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "database:\n  path: target.duckdb\njournal:\n  schema: ops\n",
    );
    let global = global_for(dir.path().to_path_buf());

    let err = record::execute(
        &RecordArgs {
            scripts: vec!["ok.sql".to_string(), String::new(), "never.sql".to_string()],
        },
        &global,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to record ''"));

    assert_eq!(recorded(dir.path(), Some("ops")), vec!["ok.sql"]);
}

#[test]
fn test_status_on_fresh_database() {
    let dir = tempdir().unwrap();
    let mut global = global_for(dir.path().to_path_buf());
    global.database = Some("target.duckdb".to_string());
    status::execute(&global).unwrap();
    assert!(recorded(dir.path(), None).is_empty());
}
