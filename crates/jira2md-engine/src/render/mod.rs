//! # Markdown Rendering
//!
//! A pure walk over a parsed [`Document`]. Nothing here re-parses text: the
//! tree shape decides every line prefix, indent and escape.
//!
//! - **`inline`**: inline spans, link forms and mention spacing
//! - **`escape`**: literal text escaping
//! - **`list`**: marker-width indentation for nested lists
//! - **`table`**: column padding and the one-line HTML forms used inside cells

pub mod escape;
pub mod inline;
pub mod list;
pub mod table;

pub use inline::{render_inline, render_inlines};

use crate::parsing::blocks::{Block, Document};

const FENCE: &str = "```";
const QUOTE_PREFIX: &str = "> ";
const QUOTE_BLANK: &str = ">";

/// Renders a document: non-empty blocks separated by blank lines.
pub fn render(doc: &Document) -> String {
    join_blocks(&doc.children, "\n\n")
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { inlines } => render_inlines(inlines),
        Block::Heading { level, inlines } => {
            format!("{} {}", "#".repeat(usize::from(*level)), render_inlines(inlines))
        }
        Block::Blockquote { children } => children
            .iter()
            .map(|child| quote_lines(&render_block(child)))
            .collect::<Vec<_>>()
            .join("\n>\n"),
        Block::Panel { title, children } => {
            let title = title
                .as_ref()
                .map(|t| format!("**{}**\n", render_inlines(t)))
                .unwrap_or_default();
            let body = join_blocks(children, "\n");
            quote_lines(format!("{title}{body}").trim())
        }
        Block::List(list) => list::render_list(list),
        Block::Table(table) => table::render_table(table),
        Block::CodeFence { lang, content } => {
            format!("{FENCE}{}\n{content}\n{FENCE}", lang.as_deref().unwrap_or_default())
        }
        Block::NoFormat {
            content,
            multiline: true,
        } => format!("{FENCE}\n{content}\n{FENCE}"),
        Block::NoFormat {
            content,
            multiline: false,
        } => format!("{FENCE}{content}{FENCE}"),
        Block::HorizontalRule => "---".to_string(),
    }
}

fn join_blocks(blocks: &[Block], sep: &str) -> String {
    blocks
        .iter()
        .map(render_block)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Prefixes every line with `> `. Blank lines get a bare `>`.
fn quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                QUOTE_BLANK.to_string()
            } else {
                format!("{QUOTE_PREFIX}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
