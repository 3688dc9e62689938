use std::path::{Path, PathBuf};

use crate::types::{KEYS_DIR, KEYS_FILE_NAME};

/// Environment variable overriding the key file location.
pub const KEYS_FILE_ENV: &str = "SHORTKEYS_FILE";

/// Returns the key file path.
///
/// Resolution order:
/// 1. `explicit` (the `--file` flag), if given
/// 2. `SHORTKEYS_FILE` environment variable (if set and non-empty)
/// 3. Current working directory + `.shortkeys/keys.yaml`
pub fn keys_file(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(KEYS_FILE_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(KEYS_DIR).join(KEYS_FILE_NAME),
    }
}
