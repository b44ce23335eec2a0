use serde::{Deserialize, Serialize};

use crate::parsing::inline::Inline;

/// A parsed block node.
///
/// Nested regions (quote and panel bodies, list items, table cells) hold their
/// own block sequences, so the tree shape carries all nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    Paragraph {
        inlines: Vec<Inline>,
    },
    /// `h1.` through `h6.`
    Heading {
        level: u8,
        inlines: Vec<Inline>,
    },
    /// `bq.` lines and `{quote}` blocks.
    Blockquote {
        children: Vec<Block>,
    },
    Panel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<Vec<Inline>>,
        children: Vec<Block>,
    },
    List(List),
    Table(Table),
    /// `{code}`. The content is a raw zone.
    CodeFence {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        content: String,
    },
    /// `{noformat}`. The content is a raw zone.
    NoFormat {
        content: String,
        #[serde(default)]
        multiline: bool,
    },
    HorizontalRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// One list entry. The first child is usually a paragraph; a nested list
/// follows it as a further child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

/// A table row. Rows of one table may have different cell counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// The cell was opened with `||`.
    pub header: bool,
    pub content: Vec<Block>,
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Block {
    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph { inlines }
    }
}
