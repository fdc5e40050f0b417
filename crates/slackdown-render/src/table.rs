//! Table rendering.
//!
//! A table linearizes into one section holding a fenced code block with a
//! pipe-delimited layout: header row, one `---` per header column, then
//! the body rows. Cells stay single-line; an image inside a cell degrades
//! to its url rather than becoming a separate block.

use slackdown_blocks::{section, Block};
use slackdown_core::{Table, TableCell, Token};

use crate::inline;

/// Render a table token to a single fenced section.
pub fn render_table(table: &Table) -> Block {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(pipe_row(&row_texts(&table.header)));
    lines.push(pipe_row(&vec!["---".to_string(); table.header.len()]));
    for row in &table.rows {
        lines.push(pipe_row(&row_texts(row)));
    }
    section(&format!("```\n{}\n```", lines.join("\n")))
}

fn row_texts(cells: &[TableCell]) -> Vec<String> {
    cells.iter().map(cell_text).collect()
}

/// A cell's phrasing children rendered to strings and space-joined.
fn cell_text(cell: &TableCell) -> String {
    cell.tokens
        .iter()
        .map(|token| match token {
            Token::Image { href, .. } => href.clone(),
            other => inline::mrkdwn(other),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
