use crate::parsing::scanner::Scanner;

use super::{
    kinds::{
        Anchor, Checkbox, Color, ImageRef, Link, Mention, Monospace, StatusIcon, TextBreak,
        TextEffect,
    },
    types::{Inline, coalesce_text},
};

/// Parses run text into a coalesced sequence of [`Inline`]s.
///
/// Never fails: anything that is not recognized markup comes back as text,
/// and no two `Text` nodes in the result are adjacent.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let mut sc = Scanner::new(s);
    let mut out = vec![];

    while let Some(c) = sc.peek_char() {
        if let Some(node) = try_parse_at(&mut sc, c) {
            out.push(node);
            continue;
        }
        if let Some(c) = sc.consume() {
            out.push(Inline::text(c));
        }
    }

    coalesce_text(out)
}

/// Dispatches on the next character to the recognizers that can start with it.
fn try_parse_at(sc: &mut Scanner<'_>, c: char) -> Option<Inline> {
    match c {
        '\\' => try_parse_line_break(sc),
        '-' => try_parse_dashes(sc).or_else(|| try_parse_effect(sc, TextEffect::Strike)),
        '{' => {
            if sc.starts_with(Monospace::OPEN) {
                try_parse_monospace(sc)
            } else if sc.starts_with(Anchor::OPEN) {
                try_parse_anchor(sc)
            } else if sc.starts_with(Color::OPEN) {
                try_parse_color(sc)
            } else {
                None
            }
        }
        '?' => {
            if sc.starts_with(TextEffect::Citation.delimiter()) {
                try_parse_effect(sc, TextEffect::Citation)
            } else {
                None
            }
        }
        '(' => try_parse_status_icon(sc),
        '[' => {
            if sc.starts_with(Mention::OPEN) {
                try_parse_mention(sc)
            } else {
                try_parse_checkbox(sc).or_else(|| try_parse_link(sc))
            }
        }
        c if c == ImageRef::DELIMITER => try_parse_image(sc),
        c => TextEffect::for_char(c).and_then(|effect| try_parse_effect(sc, effect)),
    }
}

/// Attempts a paired-delimiter effect, recursively parsing its content.
fn try_parse_effect(sc: &mut Scanner<'_>, effect: TextEffect) -> Option<Inline> {
    let caps = sc.match_at(effect.pattern())?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || !effect.accepts(whole.as_str(), &sc.rest()[whole.end()..]) {
        return None;
    }
    sc.bump_n(whole.end());
    Some(effect.wrap(parse_inline(&caps[1])))
}

fn try_parse_line_break(sc: &mut Scanner<'_>) -> Option<Inline> {
    sc.match_and_consume(TextBreak::line_break())?;
    Some(Inline::text("\n"))
}

/// `---` becomes an em dash and `--` an en dash, unless an arrow head follows.
fn try_parse_dashes(sc: &mut Scanner<'_>) -> Option<Inline> {
    for markup in [TextBreak::EM_DASH_MARKUP, TextBreak::EN_DASH_MARKUP] {
        if sc.starts_with(markup) {
            sc.bump_n(markup.len());
            return Some(Inline::text(TextBreak::dash_text(markup, sc.peek_char())));
        }
    }
    None
}

fn try_parse_monospace(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Monospace::pattern())?;
    Some(Inline::CodeSpan {
        code: caps[1].to_string(),
    })
}

fn try_parse_anchor(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Anchor::pattern())?;
    Some(Inline::Anchor {
        name: caps[1].to_string(),
    })
}

fn try_parse_color(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Color::pattern())?;
    Some(Inline::ColorSpan {
        color: caps[1].to_string(),
        children: parse_inline(&caps[2]),
    })
}

fn try_parse_status_icon(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(StatusIcon::pattern())?;
    Some(Inline::StatusIcon {
        icon: caps[0].to_string(),
    })
}

fn try_parse_mention(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Mention::pattern())?;
    Some(Inline::Mention {
        id: caps[1].to_string(),
    })
}

fn try_parse_checkbox(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Checkbox::pattern())?;
    Some(Inline::Checkbox {
        checked: Checkbox::is_checked(&caps[1]),
    })
}

fn try_parse_link(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(Link::pattern())?;
    let label = caps.get(1).map_or("", |m| m.as_str());
    let target = caps.get(2).map(|m| m.as_str());
    Some(Link::resolve(&caps[0], label, target))
}

fn try_parse_image(sc: &mut Scanner<'_>) -> Option<Inline> {
    let caps = sc.match_and_consume(ImageRef::pattern())?;
    let attrs = caps.get(2).map(|m| m.as_str());
    Some(Inline::Image(ImageRef::build(&caps[1], attrs)))
}

/// Advances past a link, image, checkbox or mention at the cursor, if one is
/// there. Table cell splitting uses this to step over pipes that belong to
/// those constructs.
pub fn skip_pipe_construct(sc: &mut Scanner<'_>) -> bool {
    let patterns = [
        Link::pattern(),
        ImageRef::pattern(),
        Checkbox::pattern(),
        Mention::pattern(),
    ];
    patterns
        .into_iter()
        .any(|re| sc.match_and_consume(re).is_some())
}
