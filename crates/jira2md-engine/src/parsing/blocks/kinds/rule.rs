use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{blocks::Block, scanner::Scanner};

static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\A----\s*$").unwrap());

/// Pattern for a line of exactly four hyphens.
pub fn pattern() -> &'static Regex {
    &RULE
}

pub fn recognize(sc: &mut Scanner<'_>) -> Option<Block> {
    sc.match_and_consume(&RULE)?;
    Some(Block::HorizontalRule)
}
