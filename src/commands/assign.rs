use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::store::{PersistOutcome, ShortcutStore};

/// Assign a shortcut to a single target.
///
/// With `key`, the proposed character is used if it is free in `group`;
/// otherwise (or without `key`) one is picked automatically.
pub fn cmd_assign(
    keys: &ShortcutStore,
    target: &str,
    key: Option<char>,
    group: &str,
    output_json: bool,
) -> Result<()> {
    let mut registry = keys.load()?;
    let short = match key {
        Some(key) => registry.assign(key, target, group)?,
        None => registry.auto_assign(target, group)?,
    };
    let outcome = keys.persist(&mut registry)?;

    CommandOutput::new(json!({
        "short": short.to_string(),
        "mapto": target,
        "label": group,
        "written": outcome == PersistOutcome::Written,
    }))
    .with_text(format_assignment(short, target))
    .print(output_json)
}

/// Auto-assign shortcuts to several targets in order.
pub fn cmd_auto(
    keys: &ShortcutStore,
    targets: &[String],
    group: &str,
    output_json: bool,
) -> Result<()> {
    let mut registry = keys.load()?;
    let mut assigned = Vec::with_capacity(targets.len());
    for target in targets {
        let short = registry.auto_assign(target, group)?;
        assigned.push((short, target.as_str()));
    }
    let outcome = keys.persist(&mut registry)?;

    let json_keys: Vec<_> = assigned
        .iter()
        .map(|(short, target)| {
            json!({
                "short": short.to_string(),
                "mapto": target,
                "label": group,
            })
        })
        .collect();
    let text: Vec<String> = assigned
        .iter()
        .map(|(short, target)| format_assignment(*short, target))
        .collect();

    CommandOutput::new(json!({
        "keys": json_keys,
        "written": outcome == PersistOutcome::Written,
    }))
    .with_text(text.join("\n"))
    .print(output_json)
}

fn format_assignment(short: char, target: &str) -> String {
    let key = format!("{short}:");
    format!(
        "{} {}",
        key.if_supports_color(Stream::Stdout, |t| t.red()),
        target
    )
}
