use serde_json::json;

use super::CommandOutput;
use crate::error::{Result, ShortkeysError};
use crate::store::ShortcutStore;

/// Print the target bound to `short` in `group`.
pub fn cmd_get(keys: &ShortcutStore, short: char, group: &str, output_json: bool) -> Result<()> {
    let registry = keys.load()?;
    let target = registry
        .resolve(short, group)
        .ok_or_else(|| ShortkeysError::ShortcutNotFound {
            short,
            group: group.to_string(),
        })?;

    CommandOutput::new(json!({
        "short": short.to_string(),
        "mapto": target,
        "label": group,
    }))
    .with_text(target)
    .print(output_json)
}
