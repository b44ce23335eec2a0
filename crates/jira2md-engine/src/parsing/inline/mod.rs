//! # Inline Parsing
//!
//! Cursor-based inline parsing of run text (paragraphs, headings, list items,
//! panel titles, link aliases).
//!
//! ## Architecture
//!
//! A single left-to-right scan dispatches on the next character to a small set
//! of candidate recognizers. Each recognizer either consumes a whole construct
//! or leaves the scanner untouched. Content inside paired delimiters is parsed
//! again recursively, so `*bold _and italic_*` nests. When nothing matches, one
//! character is consumed as literal text; literal runs are coalesced at the end.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum, `Image`, and `coalesce_text`
//! - **`kinds`**: construct-specific types owning delimiters and patterns
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zones
//!
//! `{{code}}` is never re-parsed: `{{*not bold*}}` is a single code span.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, skip_pipe_construct};
pub use types::{Image, Inline, coalesce_text};
