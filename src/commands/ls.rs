use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::{CommandOutput, entries_json};
use crate::display::{Layout, group_label, render_shortcuts};
use crate::error::Result;
use crate::store::ShortcutStore;

/// List shortcuts of one group, or of all groups.
pub fn cmd_ls(
    keys: &ShortcutStore,
    group: Option<&str>,
    layout: Layout,
    output_json: bool,
) -> Result<()> {
    let registry = keys.load()?;

    if let Some(group) = group
        && !registry.has_group(group)
    {
        let notice = format!("No shortcuts in group '{}'", group_label(group));
        return CommandOutput::new(json!({ "keys": [] }))
            .with_text(
                notice
                    .if_supports_color(Stream::Stdout, |t| t.dimmed())
                    .to_string(),
            )
            .print(output_json);
    }
    if registry.is_empty() {
        return CommandOutput::new(json!({ "keys": [] }))
            .with_text(
                "No shortcuts assigned"
                    .if_supports_color(Stream::Stdout, |t| t.dimmed())
                    .to_string(),
            )
            .print(output_json);
    }

    let selected = registry
        .entries()
        .iter()
        .filter(|e| group.is_none_or(|g| e.group == g));
    CommandOutput::new(json!({ "keys": entries_json(selected)? }))
        .with_text(render_shortcuts(registry.entries(), group, layout))
        .print(output_json)
}
