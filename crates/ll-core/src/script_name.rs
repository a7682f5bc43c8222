//! Strongly-typed migration script name.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Longest script name the ledger table column accepts, in characters.
pub const MAX_SCRIPT_NAME_LEN: usize = 255;

/// Name of an applied migration script, as recorded in the ledger table.
///
/// Always non-empty and at most [`MAX_SCRIPT_NAME_LEN`] characters. The
/// content is otherwise opaque: quotes, semicolons and comment markers are
/// all legal because the name only ever travels as a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptName(String);

impl ScriptName {
    /// Validate and wrap a script name.
    pub fn parse(name: impl Into<String>) -> CoreResult<Self> {
        let s = name.into();
        if s.is_empty() {
            return Err(CoreError::InvalidScriptName {
                name: s,
                reason: "name must not be empty".to_string(),
            });
        }
        let len = s.chars().count();
        if len > MAX_SCRIPT_NAME_LEN {
            return Err(CoreError::InvalidScriptName {
                name: s,
                reason: format!("{len} characters exceeds the limit of {MAX_SCRIPT_NAME_LEN}"),
            });
        }
        Ok(Self(s))
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ScriptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "script_name_test.rs"]
mod tests;
