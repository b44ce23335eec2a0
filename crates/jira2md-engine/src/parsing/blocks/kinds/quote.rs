use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    blocks::{Block, kinds::fenced::strip_surrounding_newlines, parse_blocks},
    inline::parse_inline,
    scanner::Scanner,
};

static QUOTE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^bq\.\s*([^\r\n]*)").unwrap());
static QUOTE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\{quote\}(.*?)\{quote\}").unwrap());

/// `bq. text`: one quoted paragraph.
pub fn recognize_line(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = sc.match_and_consume(&QUOTE_LINE)?;
    Some(Block::Blockquote {
        children: vec![Block::paragraph(parse_inline(&caps[1]))],
    })
}

/// `{quote}...{quote}`: the body is parsed as blocks. Requires a closing tag.
pub fn recognize_block(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = sc.match_and_consume(&QUOTE_BLOCK)?;
    Some(Block::Blockquote {
        children: parse_blocks(strip_surrounding_newlines(&caps[1])),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::inline::Inline;

    #[test]
    fn bq_line() {
        let mut sc = Scanner::new("bq. Some quote\nnext");
        assert_eq!(
            recognize_line(&mut sc),
            Some(Block::Blockquote {
                children: vec![Block::paragraph(vec![Inline::text("Some quote")])],
            })
        );
        assert_eq!(sc.rest(), "\nnext");
    }

    #[test]
    fn bq_line_with_crlf() {
        let mut sc = Scanner::new("bq. quoted\r\nnext");
        assert_eq!(
            recognize_line(&mut sc),
            Some(Block::Blockquote {
                children: vec![Block::paragraph(vec![Inline::text("quoted")])],
            })
        );
        assert_eq!(sc.rest(), "\r\nnext");
    }

    #[test]
    fn quote_block_parses_nested_blocks() {
        let mut sc = Scanner::new("{quote}\nh3. Inside\n* item\n{quote}");
        match recognize_block(&mut sc) {
            Some(Block::Blockquote { children }) => {
                assert!(matches!(children[0], Block::Heading { level: 3, .. }));
                assert!(matches!(children[1], Block::List(_)));
            }
            other => panic!("expected Blockquote, got {other:?}"),
        }
        assert!(!sc.has_more());
    }

    #[test]
    fn unterminated_quote_block_is_not_recognized() {
        let mut sc = Scanner::new("{quote}\nno end");
        assert_eq!(recognize_block(&mut sc), None);
        assert_eq!(sc.pos(), 0);
    }
}
