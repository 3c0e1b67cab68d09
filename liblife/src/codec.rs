//! Row-oriented text form of a grid: one line per row, `'0'` for dead,
//! `'1'` for alive. On input every other character is skipped and does
//! not occupy a column slot; on output values are space-separated and
//! each row ends with a newline.

use itertools::Itertools;

use super::error::GridError;
use super::grid::{CellState, Grid};

/// Parse one grid row per input line. The filtered length of the first
/// line fixes the column count; later lines that filter to a different
/// length are rejected rather than truncated or padded.
pub fn decode_lines<I, S>(lines: I) -> Result<Grid, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Grid::from_rows(lines.into_iter().map(|line| {
        line.as_ref()
            .chars()
            .filter_map(|symbol| match symbol {
                '0' => Some(CellState::Dead),
                '1' => Some(CellState::Alive),
                _ => None,
            })
            .collect()
    }))
}

pub fn decode(text: &str) -> Result<Grid, GridError> {
    decode_lines(text.lines())
}

/// Render the grid's rows, one terminated line per row.
pub fn encode_lines(grid: &Grid) -> impl Iterator<Item = String> + '_ {
    (0..grid.rows()).map(move |row| {
        let mut line = grid
            .enumerate_cells()
            .filter(|(pos, _)| pos.row == row)
            .map(|(_, state)| match state {
                CellState::Alive => "1",
                CellState::Dead => "0",
            })
            .join(" ");
        line.push('\n');
        line
    })
}

pub fn encode(grid: &Grid) -> String {
    encode_lines(grid).collect()
}
