//! Terminal rendering of shortcut tables.
//!
//! Read-only over registry entries. Within a group, entries are bucketed under
//! the first character of their target so related names sit together.

use owo_colors::{OwoColorize, Stream};

use crate::types::Entry;

const COMPACT_COLUMNS: usize = 3;
const TARGET_WIDTH: usize = 20;

/// How densely shortcuts are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Several shortcuts per line.
    #[default]
    Compact,
    /// One shortcut per line.
    Expanded,
}

/// Label shown for the default (empty) group.
pub fn group_label(group: &str) -> &str {
    if group.is_empty() { "(default)" } else { group }
}

/// Render `entries` for one group, or for every group when `group` is `None`.
///
/// `entries` must be in registry order (grouped by label).
pub fn render_shortcuts(entries: &[Entry], group: Option<&str>, layout: Layout) -> String {
    let mut output = String::new();

    let selected: Vec<&Entry> = entries
        .iter()
        .filter(|e| group.is_none_or(|g| e.group == g))
        .collect();

    for members in selected.chunk_by(|a, b| a.group == b.group) {
        if group.is_none() {
            if !output.is_empty() {
                output.push('\n');
            }
            let label = group_label(&members[0].group);
            output.push_str(&format!(
                "{}\n",
                label.if_supports_color(Stream::Stdout, |t| t.cyan())
            ));
        }
        render_group(&mut output, members, layout);
    }

    output
}

fn render_group(output: &mut String, members: &[&Entry], layout: Layout) {
    for bucket in members.chunk_by(|a, b| initial(a) == initial(b)) {
        let heading = format!("--------------------- {}", initial(bucket[0]).unwrap_or(' '));
        output.push_str(&format!(
            "  {}\n",
            heading.trim_end().if_supports_color(Stream::Stdout, |t| t.green())
        ));

        let per_line = match layout {
            Layout::Compact => COMPACT_COLUMNS,
            Layout::Expanded => 1,
        };
        for row in bucket.chunks(per_line) {
            let cells: Vec<String> = row.iter().map(|e| format_cell(e)).collect();
            output.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
        }
    }
}

fn initial(entry: &Entry) -> Option<char> {
    entry.target.chars().next()
}

fn format_cell(entry: &Entry) -> String {
    let key = format!("{}:", entry.short);
    format!(
        "{} {:<width$}",
        key.if_supports_color(Stream::Stdout, |t| t.red()),
        entry.target,
        width = TARGET_WIDTH
    )
}
