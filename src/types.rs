use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::ShortkeysError;

/// Default location of the key file, relative to the working directory.
pub const KEYS_DIR: &str = ".shortkeys";
pub const KEYS_FILE_NAME: &str = "keys.yaml";

/// The space bar never becomes a shortcut.
pub const RESERVED_SHORTCUT: char = ' ';

/// Last-resort candidates, tried in this exact order once neither case of the
/// target name yields a free character. Existing key files were assigned from
/// this sequence, so reordering it would reshuffle shortcuts on re-run.
pub const FALLBACK_POOL: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ,.?;{}[]|`~!@#$%^&*()";

/// A single shortcut: `short` triggers `target` within `group`.
///
/// The empty group is the default group and is distinct from every named one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub short: char,
    pub target: String,
    pub group: String,
}

impl Entry {
    pub fn new(short: char, target: impl Into<String>, group: impl Into<String>) -> Self {
        Entry {
            short,
            target: target.into(),
            group: group.into(),
        }
    }

    /// Storage order: by group, then by target.
    pub fn cmp_key(&self, other: &Entry) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.target.cmp(&other.target))
    }

    /// Compare this entry's position against a `(target, group)` probe.
    pub(crate) fn cmp_probe(&self, target: &str, group: &str) -> Ordering {
        self.group
            .as_str()
            .cmp(group)
            .then_with(|| self.target.as_str().cmp(target))
    }
}

/// One record of the key file, as it appears on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub short: String,
    pub mapto: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// Top-level document of the key file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyFile {
    #[serde(default)]
    pub keys: Vec<KeyRecord>,
}

impl TryFrom<KeyRecord> for Entry {
    type Error = ShortkeysError;

    fn try_from(record: KeyRecord) -> Result<Self, Self::Error> {
        let mut chars = record.short.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) if short != RESERVED_SHORTCUT => Ok(Entry {
                short,
                target: record.mapto,
                group: record.label,
            }),
            _ => Err(ShortkeysError::InvalidShortcut {
                short: record.short,
                target: record.mapto,
            }),
        }
    }
}

impl From<&Entry> for KeyRecord {
    fn from(entry: &Entry) -> Self {
        KeyRecord {
            short: entry.short.to_string(),
            mapto: entry.target.clone(),
            label: entry.group.clone(),
        }
    }
}
