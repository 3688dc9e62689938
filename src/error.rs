use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortkeysError {
    #[error("unable to assign any shortcut for '{target}' in group '{group}': every candidate is taken")]
    Exhausted { target: String, group: String },

    #[error("same key {short:?} in group '{group}' assigned to multiple mappings [{first}, {second}]")]
    DuplicateShortcut {
        short: char,
        group: String,
        first: String,
        second: String,
    },

    #[error("'{target}' in group '{group}' has more than one shortcut [{first:?}, {second:?}]")]
    DuplicateTarget {
        target: String,
        group: String,
        first: char,
        second: char,
    },

    #[error("invalid shortcut {short:?} for '{target}': expected a single non-space character")]
    InvalidShortcut { short: String, target: String },

    #[error("no shortcut {short:?} in group '{group}'")]
    ShortcutNotFound { short: char, group: String },

    #[error("failed to {operation} {}: {source}", path.display())]
    Storage {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse key mappings in {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("YAML serialize error: {0}")]
    YamlSerialize(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShortkeysError>;
