use colored::Colorize;

use liblife::{CellState, Grid};

/// Print one line per grid row, alive cells in green.
pub fn draw(grid: &Grid) {
    for (pos, state) in grid.enumerate_cells() {
        match state {
            CellState::Alive => print!("{} ", "1".green()),
            CellState::Dead => print!("0 "),
        }

        if pos.col == grid.cols() - 1 {
            println!();
        }
    }
    println!();
}
