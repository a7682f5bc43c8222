//! Shared helpers for loading configuration and opening the journal

use anyhow::{Context, Result};
use ll_core::{Config, CoreError};
use ll_db::DuckDbProvider;
use ll_journal::{Journal, LogFacadeSink, LogSink, StderrSink};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Load configuration honoring `--config` and `--database`.
///
/// Without a config file the defaults apply, but only when `--database`
/// names a target; the default in-memory database would make every command
/// a no-op.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let loaded = match &global.config {
        Some(path) => Config::load(path),
        None => Config::load_from_dir(&global.project_dir),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(CoreError::ConfigNotFound { .. })
            if global.config.is_none() && global.database.is_some() =>
        {
            Config::default()
        }
        Err(e) => return Err(e).context("Failed to load configuration"),
    };

    if let Some(database) = &global.database {
        config.database.path = database.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Resolve a relative database path against the project directory.
pub(crate) fn resolve_db_path(project_dir: &Path, path: &str) -> String {
    if path == ll_db::duckdb::MEMORY_PATH || Path::new(path).is_absolute() {
        path.to_string()
    } else {
        project_dir.join(path).display().to_string()
    }
}

/// Open the journal described by the global arguments.
pub(crate) fn open_journal(global: &GlobalArgs) -> Result<Journal> {
    let config = load_config(global)?;
    let db_path = resolve_db_path(&global.project_dir, &config.database.path);
    let provider = DuckDbProvider::new(&db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    let sink: Arc<dyn LogSink> = if global.verbose {
        Arc::new(StderrSink)
    } else {
        Arc::new(LogFacadeSink)
    };

    let journal = Journal::from_config(Arc::new(provider), &config.journal, sink)?;
    log::debug!("Opened {journal:?}");
    Ok(journal)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
