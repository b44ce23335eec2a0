use crate::parsing::blocks::{Block, Table, TableCell};

use super::{list::render_list, render_block};

/// Stands in for a newline inside a cell, where Markdown allows none.
pub const CELL_BREAK: &str = "<br>";
const SEPARATOR_CELL: &str = "---|";

/// Renders a pipe table.
///
/// The column count is the widest row. Other rows with more than one cell are
/// padded to it; single-cell rows are left as they are. The separator row
/// always follows the first row.
pub fn render_table(table: &Table) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            row.cells
                .iter()
                .map(|cell| render_cell(cell, row_idx))
                .collect()
        })
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut lines: Vec<String> = rows
        .into_iter()
        .map(|mut cells| {
            if cells.len() > 1 {
                cells.resize(columns, String::new());
            }
            format!("|{}|", cells.join("|"))
        })
        .collect();
    lines.insert(1, format!("|{}", SEPARATOR_CELL.repeat(columns)));

    lines.join("\n")
}

/// Cell content on one line. Code becomes inline HTML and header cells after
/// the first row are bolded.
fn render_cell(cell: &TableCell, row_idx: usize) -> String {
    let content = cell
        .content
        .iter()
        .map(|block| match block {
            Block::CodeFence { lang, content } => {
                let class = lang
                    .as_ref()
                    .map(|lang| format!(r#" class="language-{lang}""#))
                    .unwrap_or_default();
                format!("<pre><code{class}>{content}</code></pre>")
            }
            Block::NoFormat { content, .. } => format!("<pre><code>{content}</code></pre>"),
            Block::List(list) => render_list(list),
            other => render_block(other),
        })
        .collect::<Vec<_>>()
        .join(CELL_BREAK)
        .replace("\r\n", "\n")
        .replace('\n', CELL_BREAK);

    if cell.header && row_idx > 0 {
        format!("**{content}**")
    } else {
        content
    }
}
