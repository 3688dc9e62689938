//! YAML form of the key file.
//!
//! ```yaml
//! keys:
//! - short: o
//!   mapto: open
//!   label: file
//! - short: h
//!   mapto: help
//! ```
//!
//! `label` is left out for the default group.

use crate::error::Result;
use crate::types::{Entry, KeyFile, KeyRecord};

/// Parse raw key file bytes. Blank input is an empty document.
pub fn parse_key_file(bytes: &[u8]) -> std::result::Result<KeyFile, serde_yaml_ng::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(KeyFile::default());
    }
    serde_yaml_ng::from_slice(bytes)
}

/// Convert parsed records into entries, rejecting malformed shortcuts.
pub fn into_entries(file: KeyFile) -> Result<Vec<Entry>> {
    file.keys.into_iter().map(Entry::try_from).collect()
}

pub fn serialize_entries(entries: &[Entry]) -> Result<String> {
    let file = KeyFile {
        keys: entries.iter().map(KeyRecord::from).collect(),
    };
    Ok(serde_yaml_ng::to_string(&file)?)
}
