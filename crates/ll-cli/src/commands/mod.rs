//! CLI command implementations

pub(crate) mod common;
pub(crate) mod history;
pub(crate) mod list;
pub(crate) mod record;
pub(crate) mod status;
