//! `{noformat}`, `{code}` and `{panel}`: blocks opened by a `{name:params}`
//! tag and closed by a bare `{name}` tag.
//!
//! A missing closing tag is not an error; the block runs to end of input.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::parsing::{
    blocks::{Block, parse_blocks},
    inline::parse_inline,
    params::Parameters,
    scanner::Scanner,
};

static NOFORMAT: LazyLock<Regex> = LazyLock::new(|| tag_pattern("noformat"));
static CODE: LazyLock<Regex> = LazyLock::new(|| tag_pattern("code"));
static PANEL: LazyLock<Regex> = LazyLock::new(|| tag_pattern("panel"));

/// Group 1: parameter string, group 2: body, group 3: closing tag (empty when
/// the block runs to end of input).
fn tag_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)^\{{{name}(?::([^}}]+))?\}}(.*?)(\{{{name}\}}|$)"
    ))
    .unwrap()
}

/// Strips at most one newline from each end.
pub fn strip_surrounding_newlines(text: &str) -> &str {
    let text = text
        .strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text);
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn consume_tagged<'a>(sc: &mut Scanner<'a>, re: &Regex, name: &str) -> Option<Captures<'a>> {
    let caps = sc.match_and_consume(re)?;
    if caps.get(3).is_none_or(|close| close.is_empty()) {
        debug!("unterminated {{{name}}} block runs to end of input");
    }
    Some(caps)
}

fn params_of(caps: &Captures<'_>) -> Parameters {
    Parameters::parse(caps.get(1).map_or("", |m| m.as_str()))
}

pub fn recognize_noformat(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = consume_tagged(sc, &NOFORMAT, "noformat")?;
    let content = strip_surrounding_newlines(&caps[2]);
    Some(Block::NoFormat {
        multiline: content.contains('\n') || caps[0].contains('\n'),
        content: content.to_string(),
    })
}

pub fn recognize_code(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = consume_tagged(sc, &CODE, "code")?;
    let params = params_of(&caps);
    Some(Block::CodeFence {
        lang: params
            .default_value()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        content: strip_surrounding_newlines(&caps[2]).to_string(),
    })
}

pub fn recognize_panel(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = consume_tagged(sc, &PANEL, "panel")?;
    let params = params_of(&caps);
    Some(Block::Panel {
        title: params.non_empty("title").map(parse_inline),
        children: parse_blocks(strip_surrounding_newlines(&caps[2])),
    })
}
