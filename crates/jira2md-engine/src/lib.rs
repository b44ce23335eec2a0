//! Converts Jira wiki markup to Markdown.
//!
//! ```
//! assert_eq!(jira2md_engine::convert("h1. *Hello*"), "# **Hello**");
//! ```

pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{Block, Document, List, ListItem, Table, TableCell, TableRow},
    inline::{Image, Inline, coalesce_text, parse_inline},
    params::Parameters,
    parse_document,
    scanner::Scanner,
};
pub use render::{render, render_block, render_inlines};

/// Parses `input` and renders it as Markdown.
pub fn convert(input: &str) -> String {
    render(&parse_document(input))
}
