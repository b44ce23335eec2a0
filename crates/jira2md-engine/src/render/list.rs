use crate::parsing::blocks::{Block, List};

use super::render_block;

pub const BULLET_MARKER: &str = "- ";
/// Every ordered item uses this marker; Markdown renumbers them.
pub const ORDERED_MARKER: &str = "1. ";

/// Renders a list. Continuation lines of an item, nested lists included, are
/// indented by the width of the item's marker.
pub fn render_list(list: &List) -> String {
    let marker = if list.ordered {
        ORDERED_MARKER
    } else {
        BULLET_MARKER
    };
    let indent = " ".repeat(marker.len());
    let mut lines = vec![];

    for item in &list.items {
        let rendered = item
            .children
            .iter()
            .map(|child| match child {
                Block::List(nested) => render_list(nested),
                other => render_block(other).trim().to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let mut item_lines = rendered.lines();
        lines.push(format!("{marker}{}", item_lines.next().unwrap_or_default()));
        lines.extend(item_lines.map(|line| format!("{indent}{line}")));
    }

    lines.join("\n")
}
