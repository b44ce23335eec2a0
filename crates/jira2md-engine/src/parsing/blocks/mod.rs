//! # Block Parsing
//!
//! Ordered-recognizer block parsing. At each position the parser tries a fixed
//! list of recognizers and takes the first that matches; when none does, one
//! line is consumed and, if not blank, becomes a paragraph.
//!
//! ## Recognizer Order
//!
//! heading, horizontal rule, `bq.` line, `{quote}`, `{noformat}`, `{code}`,
//! `{panel}`, list, table.
//!
//! ## Modules
//!
//! - **`types`**: the document tree (`Document`, `Block`, `List`, `Table`, ...)
//! - **`kinds`**: one recognizer per construct, owning its patterns
//! - **`parser`**: `parse_blocks()`, the recognizer table and lookahead probes
//!
//! ## Key Invariants
//!
//! - A recognizer that does not match leaves the scanner where it found it.
//! - Quote bodies, panel bodies and table cells are parsed recursively with
//!   the same recognizer list, so nesting depth is unbounded.
//! - Code and noformat bodies are raw zones: never parsed, never escaped.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{BlockKind, block_match_len, parse_blocks, starts_new_block};
pub use types::{Block, Document, List, ListItem, Table, TableCell, TableRow};
