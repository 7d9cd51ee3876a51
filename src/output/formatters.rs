//! Formatting utilities for terminal output

use crate::core::{Grid, Position};

/// Lay the board out as spaced rows separated by blank lines
#[must_use]
pub fn format_board(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Show a path as letters with their cells, e.g. `F(2,2) → A(2,1)`
#[must_use]
pub fn format_path(grid: &Grid, path: &[Position]) -> String {
    path.iter()
        .map(|&position| {
            let letter = grid.at(position).unwrap_or('?');
            format!("{letter}({},{})", position.row, position.col)
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
