//! Command implementations for the `shortkeys` binary.
//!
//! Each command loads the key file, applies its operation, persists the
//! registry if it changed and prints either text or JSON.

mod assign;
mod check;
mod get;
mod ls;

pub use assign::{cmd_assign, cmd_auto};
pub use check::cmd_check;
pub use get::cmd_get;
pub use ls::cmd_ls;

use serde_json::Value;

use crate::error::Result;
use crate::types::{Entry, KeyRecord};

/// Output of a command: a JSON value plus an optional human-readable form.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise as text (falling back to JSON).
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{}", text.trim_end_matches('\n')),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// JSON form of entries, using the key file field names.
pub(crate) fn entries_json<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Result<Value> {
    let records: Vec<KeyRecord> = entries.into_iter().map(KeyRecord::from).collect();
    Ok(serde_json::to_value(records)?)
}
