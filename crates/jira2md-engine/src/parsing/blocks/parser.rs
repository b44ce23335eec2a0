use log::trace;

use crate::parsing::{inline::parse_inline, scanner::Scanner};

use super::{
    kinds::{fenced, heading, list, quote, rule, table},
    types::Block,
};

/// A block recognizer: consumes one block at the cursor, or leaves the cursor
/// untouched and returns `None`.
pub type Recognizer = fn(&mut Scanner<'_>) -> Option<Block>;

/// Identifies a recognizer so probes can leave some of them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    HorizontalRule,
    QuoteLine,
    QuoteBlock,
    NoFormat,
    Code,
    Panel,
    List,
    Table,
}

/// Recognizers in priority order. The first match wins.
const RECOGNIZERS: [(BlockKind, Recognizer); 9] = [
    (BlockKind::Heading, heading::recognize),
    (BlockKind::HorizontalRule, rule::recognize),
    (BlockKind::QuoteLine, quote::recognize_line),
    (BlockKind::QuoteBlock, quote::recognize_block),
    (BlockKind::NoFormat, fenced::recognize_noformat),
    (BlockKind::Code, fenced::recognize_code),
    (BlockKind::Panel, fenced::recognize_panel),
    (BlockKind::List, list::recognize),
    (BlockKind::Table, table::recognize),
];

/// Parses a block-bearing region into its blocks.
///
/// Used for whole documents and, recursively, for quote and panel bodies and
/// table cells.
pub fn parse_blocks(s: &str) -> Vec<Block> {
    let mut sc = Scanner::new(s);
    let mut out = vec![];

    while sc.has_more() {
        if let Some((kind, block)) = recognize(&mut sc, &[]) {
            trace!("recognized {kind:?} block ending at byte {}", sc.pos());
            out.push(block);
            continue;
        }

        let line = sc.consume_line();
        if !line.trim().is_empty() {
            out.push(Block::paragraph(parse_inline(line)));
        }
    }

    out
}

fn recognize(sc: &mut Scanner<'_>, skip: &[BlockKind]) -> Option<(BlockKind, Block)> {
    RECOGNIZERS
        .iter()
        .filter(|(kind, _)| !skip.contains(kind))
        .find_map(|(kind, recognizer)| recognizer(sc).map(|block| (*kind, block)))
}

/// Length in bytes of the block that would be recognized at the cursor,
/// ignoring the kinds in `skip`. The cursor is always left in place.
pub fn block_match_len(sc: &mut Scanner<'_>, skip: &[BlockKind]) -> Option<usize> {
    sc.speculate(|sc| {
        let start = sc.pos();
        recognize(sc, skip)?;
        Some(sc.pos() - start).filter(|len| *len > 0)
    })
}

/// Whether a block other than a list starts at the cursor.
pub fn starts_new_block(sc: &mut Scanner<'_>) -> bool {
    block_match_len(sc, &[BlockKind::List]).is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::inline::Inline;

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_blocks("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(parse_blocks("\n  \n\t\n").is_empty());
    }

    #[test]
    fn one_paragraph_per_line() {
        assert_eq!(
            parse_blocks("first\nsecond"),
            vec![
                Block::paragraph(vec![Inline::text("first")]),
                Block::paragraph(vec![Inline::text("second")]),
            ]
        );
    }

    #[test]
    fn recognizer_order_prefers_heading() {
        let blocks = parse_blocks("h2. Title\nbody");
        assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
        assert!(matches!(blocks[1], Block::Paragraph { .. }));
    }

    #[test]
    fn block_match_len_does_not_move_cursor() {
        let mut sc = Scanner::new("{code}x{code} tail");
        assert_eq!(block_match_len(&mut sc, &[]), Some(13));
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn block_match_len_honors_skip() {
        let mut sc = Scanner::new("* item");
        assert!(block_match_len(&mut sc, &[]).is_some());
        assert_eq!(block_match_len(&mut sc, &[BlockKind::List]), None);
    }

    #[test]
    fn starts_new_block_ignores_lists() {
        assert!(!starts_new_block(&mut Scanner::new("* item")));
        assert!(starts_new_block(&mut Scanner::new("h1. x")));
        assert!(starts_new_block(&mut Scanner::new("|cell|")));
        assert!(!starts_new_block(&mut Scanner::new("plain")));
    }
}
