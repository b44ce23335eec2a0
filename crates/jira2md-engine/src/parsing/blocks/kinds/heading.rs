use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{blocks::Block, inline::parse_inline, scanner::Scanner};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*h([1-6])\.\s*([^\r\n]+)").unwrap());

/// Pattern for `h1.` through `h6.`, with optional leading spaces or tabs.
pub fn pattern() -> &'static Regex {
    &HEADING
}

pub fn recognize(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = sc.match_and_consume(&HEADING)?;
    let level = caps[1].parse().ok()?;
    Some(Block::Heading {
        level,
        inlines: parse_inline(&caps[2]),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::parsing::inline::Inline;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn every_level(#[case] level: u8) {
        let src = format!("h{level}. X");
        let mut sc = Scanner::new(&src);
        assert_eq!(
            recognize(&mut sc),
            Some(Block::Heading {
                level,
                inlines: vec![Inline::text("X")],
            })
        );
    }

    #[test]
    fn level_seven_is_not_a_heading() {
        let mut sc = Scanner::new("h7. Title");
        assert_eq!(recognize(&mut sc), None);
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        let mut sc = Scanner::new("  h2. Title\nnext");
        assert!(recognize(&mut sc).is_some());
        assert_eq!(sc.rest(), "\nnext");
    }

    #[test]
    fn crlf_line_ending_is_not_part_of_title() {
        let mut sc = Scanner::new("h1. Title\r\nbody");
        assert_eq!(
            recognize(&mut sc),
            Some(Block::Heading {
                level: 1,
                inlines: vec![Inline::text("Title")],
            })
        );
        assert_eq!(sc.rest(), "\r\nbody");
    }

    #[test]
    fn marker_mid_line_is_not_a_heading() {
        let mut sc = Scanner::new(" A  h2. Title");
        assert_eq!(recognize(&mut sc), None);
    }
}
