use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::store::ShortcutStore;

/// Load and validate the key file, reporting what it holds.
pub fn cmd_check(keys: &ShortcutStore, output_json: bool) -> Result<()> {
    // Loading sorts and validates; a registry in hand is consistent.
    let registry = keys.load()?;

    let groups = registry.groups();
    let text = format!(
        "{} {} shortcuts in {} groups, no conflicts ({})",
        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
        registry.len(),
        groups.len(),
        keys.path().display()
    );

    CommandOutput::new(json!({
        "valid": true,
        "entries": registry.len(),
        "groups": groups,
        "path": keys.path().to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}
