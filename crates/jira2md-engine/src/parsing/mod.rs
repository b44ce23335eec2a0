pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod params;
pub mod scanner;

#[cfg(test)]
mod tests;

use blocks::{Document, parse_blocks};

/// Parses a whole wiki-markup document into its block tree.
pub fn parse_document(s: &str) -> Document {
    Document {
        children: parse_blocks(s),
    }
}
