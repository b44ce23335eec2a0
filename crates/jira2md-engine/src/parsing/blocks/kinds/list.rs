//! Lists built from marker runs: `*` bullets, `#` numbers, nested by repeating
//! markers (`**`, `*#`, ...).

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::parsing::{
    blocks::{Block, List, ListItem, starts_new_block},
    inline::parse_inline,
    scanner::Scanner,
};

static LIST_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*([*#]+)\s+").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([*#]+)\s+(.*)").unwrap());
static LEADING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*").unwrap());
static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\r?\n").unwrap());
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*\r?\n").unwrap());
static MARKER_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*[*#]+").unwrap());

pub const BULLET: char = '*';
pub const NUMBER: char = '#';

/// Pattern for a line that opens a list item.
pub fn start_pattern() -> &'static Regex {
    &LIST_START
}

pub fn recognize(sc: &mut Scanner<'_>) -> Option<Block> {
    let caps = sc.match_at(&LIST_START)?;
    let base = caps[1].chars().next()?;
    let start = sc.pos();
    let mut builder = ListBuilder::new(base == NUMBER);

    while sc.has_more() {
        let line_start = sc.pos();
        sc.match_and_consume(&LEADING_WS);
        let Some(item) = sc.match_and_consume(&LIST_ITEM) else {
            sc.reset(line_start);
            break;
        };
        let markers = item.get(1).map_or("", |m| m.as_str());
        if !markers.starts_with(base) {
            debug!("list ends at marker {markers:?}, expected {base:?}");
            sc.reset(line_start);
            break;
        }

        let mut content = item[2].trim_end().to_string();
        sc.match_and_consume(&NEWLINE);
        while sc.has_more() && continues_item(sc) {
            content.push('\n');
            content.push_str(sc.consume_line().trim_end());
        }
        builder.push(markers, &content);
    }

    if builder.is_empty() {
        sc.reset(start);
        return None;
    }
    Some(Block::List(builder.finish()))
}

/// A following line belongs to the current item unless it is blank, starts
/// with markers, or starts some other block.
fn continues_item(sc: &mut Scanner<'_>) -> bool {
    sc.match_at(&BLANK_LINE).is_none()
        && sc.match_at(&MARKER_LINE).is_none()
        && !starts_new_block(sc)
}

/// One open list level: the list itself and its items so far.
#[derive(Debug)]
struct Frame {
    ordered: bool,
    items: Vec<ListItem>,
}

impl Frame {
    fn into_list(self) -> List {
        List {
            ordered: self.ordered,
            items: self.items,
        }
    }
}

/// Builds a nested list from marker runs with a stack of open levels.
///
/// `frames[0]` is the outermost list. `frames[k + 1]`, when present, is the
/// nested list that will be attached to the last item of `frames[k]` once it
/// is closed. Closing pops a frame and appends it to that item's children.
#[derive(Debug)]
pub struct ListBuilder {
    frames: Vec<Frame>,
}

impl ListBuilder {
    pub fn new(ordered: bool) -> Self {
        Self {
            frames: vec![Frame {
                ordered,
                items: vec![],
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(|f| f.items.is_empty())
    }

    /// Adds an item whose depth and per-level kind come from `markers`.
    ///
    /// Every marker after the first selects the nested list one level deeper:
    /// the open list at that level is reused when its kind matches and
    /// replaced by a fresh one otherwise.
    pub fn push(&mut self, markers: &str, content: &str) {
        let levels: Vec<bool> = markers.chars().map(|c| c == NUMBER).collect();
        let depth = levels.len().saturating_sub(1);

        for (level, &ordered) in levels.iter().enumerate().skip(1) {
            let reusable = self.frames.get(level).is_some_and(|f| f.ordered == ordered);
            if reusable {
                continue;
            }
            self.close_to(level);
            if let Some(parent) = self.frames.last_mut() {
                if parent.items.is_empty() {
                    parent.items.push(ListItem::default());
                }
            }
            self.frames.push(Frame {
                ordered,
                items: vec![],
            });
        }

        self.close_to(depth + 1);
        if let Some(frame) = self.frames.last_mut() {
            frame.items.push(ListItem {
                children: vec![Block::paragraph(parse_inline(content))],
            });
        }
    }

    /// Closes open levels until only `len` remain. The outermost list is
    /// never closed here.
    fn close_to(&mut self, len: usize) {
        while self.frames.len() > len.max(1) {
            let Some(frame) = self.frames.pop() else {
                break;
            };
            let nested = Block::List(frame.into_list());
            if let Some(item) = self.frames.last_mut().and_then(|p| p.items.last_mut()) {
                item.children.push(nested);
            }
        }
    }

    pub fn finish(mut self) -> List {
        self.close_to(1);
        match self.frames.pop() {
            Some(root) => root.into_list(),
            None => List {
                ordered: false,
                items: vec![],
            },
        }
    }
}
