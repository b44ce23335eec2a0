//! Structural checks on a parsed tree.
//!
//! The parser guarantees that:
//! - no inline sequence holds two adjacent `Text` nodes
//! - heading levels are 1 to 6
//! - tables have at least one row and rows at least one cell
//!
//! Tests and fixtures run [`check`] on every tree they build.

use crate::parsing::{
    blocks::{Block, Document},
    inline::{Image, Inline},
};

/// Validates a parsed document.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    check_blocks(&doc.children);
}

fn check_blocks(blocks: &[Block]) {
    for b in blocks {
        match b {
            Block::Paragraph { inlines } => check_inlines(inlines),
            Block::Heading { level, inlines } => {
                assert!(
                    (1..=6).contains(level),
                    "heading level out of range: {level}"
                );
                check_inlines(inlines);
            }
            Block::Blockquote { children } => check_blocks(children),
            Block::Panel { title, children } => {
                if let Some(title) = title {
                    check_inlines(title);
                }
                check_blocks(children);
            }
            Block::List(list) => {
                for item in &list.items {
                    check_blocks(&item.children);
                }
            }
            Block::Table(table) => {
                assert!(!table.rows.is_empty(), "table without rows");
                for row in &table.rows {
                    assert!(!row.cells.is_empty(), "table row without cells");
                    for cell in &row.cells {
                        check_blocks(&cell.content);
                    }
                }
            }
            Block::CodeFence { .. } | Block::NoFormat { .. } | Block::HorizontalRule => {}
        }
    }
}

fn check_inlines(inlines: &[Inline]) {
    for pair in inlines.windows(2) {
        assert!(
            !(pair[0].is_text() && pair[1].is_text()),
            "adjacent text nodes: {:?}, {:?}",
            pair[0],
            pair[1]
        );
    }

    for node in inlines {
        match node {
            Inline::Strong { children }
            | Inline::Strike { children }
            | Inline::Underline { children }
            | Inline::Emphasis { children }
            | Inline::Sup { children }
            | Inline::Sub { children }
            | Inline::InlineQuote { children }
            | Inline::ColorSpan { children, .. } => check_inlines(children),
            Inline::Link {
                text: Some(text), ..
            } => check_inlines(text),
            Inline::Image(Image { src, .. }) => {
                assert!(!src.is_empty(), "image without source");
            }
            _ => {}
        }
    }
}
