//! Pipe-delimited tables: `||header||header||` and `|cell|cell|` rows.
//!
//! A logical row may span several physical lines, which lets a cell hold a
//! multi-line `{code}` block. Within a row, pipes that belong to links,
//! images, checkboxes, mentions or nested blocks do not split cells.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::parsing::{
    blocks::{
        Block, BlockKind, Table, TableCell, TableRow, block_match_len,
        kinds::{heading, list, rule},
        parse_blocks,
    },
    inline::skip_pipe_construct,
    scanner::Scanner,
};

static TABLE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*\|").unwrap());

pub const CELL: &str = "|";
pub const HEADER_CELL: &str = "||";
/// Written inside a cell to separate lines; becomes a real newline.
pub const CELL_LINE_BREAK: &str = "\\\\";

pub fn recognize(sc: &mut Scanner<'_>) -> Option<Block> {
    sc.match_at(&TABLE_START)?;
    let start = sc.pos();
    let mut rows = vec![];

    while sc.has_more() {
        if !sc.peek_line().trim().starts_with(CELL) {
            break;
        }
        let cells = split_cells(consume_row(sc));
        if !cells.is_empty() {
            rows.push(TableRow { cells });
        }
    }

    if rows.is_empty() {
        debug!("table candidate at byte {start} has no cells, reading as text");
        sc.reset(start);
        return None;
    }
    Some(Block::Table(Table { rows }))
}

/// Consumes one logical row: its first line plus any continuation lines.
///
/// A continuation ends at a line starting with `|`, a blank line, or a
/// heading, rule or list line.
fn consume_row<'a>(sc: &mut Scanner<'a>) -> &'a str {
    let start = sc.pos();
    sc.consume_line();

    while sc.has_more() {
        let trimmed = sc.peek_line().trim();
        if trimmed.starts_with(CELL) || trimmed.is_empty() {
            break;
        }
        if sc.match_at(heading::pattern()).is_some()
            || sc.match_at(rule::pattern()).is_some()
            || sc.match_at(list::start_pattern()).is_some()
        {
            break;
        }
        sc.consume_line();
    }

    &sc.s[start..sc.pos()]
}

/// Splits a row into cells. A cell opened with `||` is a header cell.
pub fn split_cells(row: &str) -> Vec<TableCell> {
    let mut cells = vec![];
    let mut remaining = row.trim();
    remaining = remaining
        .strip_suffix(HEADER_CELL)
        .or_else(|| remaining.strip_suffix(CELL))
        .unwrap_or(remaining);

    while !remaining.is_empty() {
        let (header, body) = if let Some(body) = remaining.strip_prefix(HEADER_CELL) {
            (true, body)
        } else if let Some(body) = remaining.strip_prefix(CELL) {
            (false, body)
        } else {
            match remaining.find(CELL) {
                Some(idx) => {
                    remaining = &remaining[idx..];
                    continue;
                }
                None => break,
            }
        };

        let end = cell_end(body);
        cells.push(TableCell {
            header,
            content: parse_cell(&body[..end]),
        });
        remaining = &body[end..];
    }

    cells
}

/// Byte offset of the pipe that ends the cell starting at `text`, or the end
/// of `text` when there is none.
///
/// At each position the first construct that matches wins: pipe-bearing
/// inlines first, then any block except lists and tables. A match is
/// skipped whole.
fn cell_end(text: &str) -> usize {
    let mut sc = Scanner::new(text);

    while let Some(c) = sc.peek_char() {
        if sc.starts_with(CELL) {
            return sc.pos();
        }
        if skip_pipe_construct(&mut sc) {
            continue;
        }
        if let Some(len) = block_match_len(&mut sc, &[BlockKind::List, BlockKind::Table]) {
            sc.bump_n(len);
            continue;
        }
        sc.bump_n(c.len_utf8());
    }

    sc.pos()
}

fn parse_cell(raw: &str) -> Vec<Block> {
    parse_blocks(raw.trim().replace(CELL_LINE_BREAK, "\n").trim())
}
