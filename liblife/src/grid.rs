use itertools::Itertools;

use super::error::GridError;
use super::pos::Position;

/// The eight Moore-neighborhood offsets, in row-then-column scan order.
/// Offsets that fall outside the grid are skipped, not wrapped.
const NEIGHBOR_OFFSETS: &[[isize; 2]; 8] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

/// A finite rectangular grid of cells with fixed dimensions.
///
/// Cells are stored row-major in a flat vector. A grid is never mutated
/// cell-by-cell after construction; [`Grid::step`] returns a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-dead grid of the given dimensions.
    pub fn dead(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_dimensions(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::default(); rows * cols],
        })
    }

    /// A grid filled by consuming `alive` exactly `rows * cols` times, in
    /// row-major order; `true` becomes an alive cell. The generator is
    /// not retained.
    pub fn random<F>(rows: usize, cols: usize, mut alive: F) -> Result<Self, GridError>
    where
        F: FnMut() -> bool,
    {
        Self::check_dimensions(rows, cols)?;

        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|_| {
                if alive() {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// A grid built from explicit rows of states. Every row must have the
    /// same length as the first, and at least one non-empty row is
    /// required.
    pub fn from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<CellState>>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = 0;

        for (index, row) in rows.into_iter().enumerate() {
            if index == 0 {
                if row.is_empty() {
                    return Err(GridError::MalformedInput(
                        "first row contains no cells".into(),
                    ));
                }
                cols = row.len();
            } else if row.len() != cols {
                return Err(GridError::MalformedInput(format!(
                    "row {index} has {} cells, expected {cols}",
                    row.len()
                )));
            }

            cells.extend(row);
            row_count += 1;
        }

        if row_count == 0 {
            return Err(GridError::MalformedInput("no rows supplied".into()));
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.pos_to_index(Position { row, col })
            .map(|index| self.cells[index])
            .ok_or(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Count of alive cells among the in-bounds Moore neighbors of
    /// `(row, col)`. Corner cells have 3 candidates, non-corner edge
    /// cells 5, interior cells 8.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|[row_offset, col_offset]| {
                let pos = Position {
                    row: row.checked_add_signed(*row_offset)?,
                    col: col.checked_add_signed(*col_offset)?,
                };

                let index = self.pos_to_index(pos)?;
                Some(self.cells[index])
            })
            .filter(|neighbor| *neighbor == CellState::Alive)
            .count()
    }

    /// One synchronous generation. Every next state is computed from the
    /// receiver's snapshot and collected into a fresh buffer, so no cell
    /// ever observes another cell's already-updated state. The receiver
    /// is left untouched.
    pub fn step(&self) -> Grid {
        let cells = self
            .enumerate_cells()
            .map(|(pos, state)| self.next_state(pos, state))
            .collect();

        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    fn next_state(&self, pos: Position, state: CellState) -> CellState {
        let alive_neighbors = self.live_neighbor_count(pos.row, pos.col);

        let alive = match state {
            CellState::Alive => alive_neighbors == 2 || alive_neighbors == 3,
            CellState::Dead => alive_neighbors == 3,
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    /// Row-major traversal of `(position, state)` pairs. Each call starts
    /// an independent cursor over the same snapshot, so concurrent
    /// traversals never interfere.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, state)| (self.index_to_pos(index), *state))
    }

    fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        Ok(())
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }

        Some(pos.col + pos.row * self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.cols,
            col: index % self.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn grid_of(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows.iter().map(|row| {
            row.iter()
                .map(|cell| {
                    if *cell == 1 {
                        CellState::Alive
                    } else {
                        CellState::Dead
                    }
                })
                .collect()
        }))
        .unwrap()
    }

    #[test]
    fn dead_grid_is_a_fixed_point() {
        for (rows, cols) in [(1, 1), (1, 7), (4, 4), (5, 3)] {
            let grid = Grid::dead(rows, cols).unwrap();
            assert_eq!(grid.step(), grid);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::dead(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::random(3, 0, || true),
            Err(GridError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn single_cell_has_no_neighbors_and_dies() {
        let grid = grid_of(&[&[1]]);

        assert_eq!(grid.live_neighbor_count(0, 0), 0);
        assert_eq!(grid.step(), Grid::dead(1, 1).unwrap());
    }

    #[test]
    fn neighbor_candidates_clip_at_the_boundary() {
        // All-alive 4x5 grid, so the count equals the number of in-bounds
        // neighbor coordinates.
        let grid = Grid::random(4, 5, || true).unwrap();

        for (row, col) in [(0, 0), (0, 4), (3, 0), (3, 4)] {
            assert_eq!(grid.live_neighbor_count(row, col), 3, "corner ({row},{col})");
        }

        for (row, col) in [(0, 2), (3, 1), (1, 0), (2, 4)] {
            assert_eq!(grid.live_neighbor_count(row, col), 5, "edge ({row},{col})");
        }

        for (row, col) in (1..3).cartesian_product(1..4) {
            assert_eq!(grid.live_neighbor_count(row, col), 8, "interior ({row},{col})");
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let block = grid_of(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);

        assert_eq!(block.step(), block);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_of(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let vertical = grid_of(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);

        assert_eq!(horizontal.step(), vertical);
        assert_eq!(horizontal.step().step(), horizontal);
    }

    #[test]
    fn step_leaves_the_receiver_untouched() {
        let grid = grid_of(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let before = grid.clone();

        let first = grid.step();
        let second = grid.step();

        assert_eq!(grid, before);
        assert_eq!(first, second);
    }

    #[test]
    fn random_fill_consumes_the_generator_in_row_major_order() {
        let script = [true, false, false, true, false, true];
        let mut calls = 0;

        let grid = Grid::random(2, 3, || {
            let value = script[calls];
            calls += 1;
            value
        })
        .unwrap();

        assert_eq!(calls, 6);
        for (index, expected) in script.iter().enumerate() {
            let state = grid.get(index / 3, index % 3).unwrap();
            assert_eq!(state == CellState::Alive, *expected);
        }
    }

    #[test]
    fn random_fill_accepts_a_real_rng() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::random(6, 6, || rng.random_bool(0.5)).unwrap();

        let repeat = {
            let mut rng = StdRng::seed_from_u64(42);
            Grid::random(6, 6, || rng.random_bool(0.5)).unwrap()
        };

        assert_eq!(grid, repeat);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        let ragged = Grid::from_rows(vec![
            vec![CellState::Dead, CellState::Alive],
            vec![CellState::Dead],
        ]);
        assert!(matches!(ragged, Err(GridError::MalformedInput(_))));

        assert!(matches!(
            Grid::from_rows(Vec::new()),
            Err(GridError::MalformedInput(_))
        ));
        assert!(matches!(
            Grid::from_rows(vec![Vec::new()]),
            Err(GridError::MalformedInput(_))
        ));
    }

    #[test]
    fn get_checks_bounds() {
        let grid = grid_of(&[&[0, 1], &[1, 0]]);

        assert_eq!(grid.get(0, 1), Ok(CellState::Alive));
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn traversal_is_row_major_and_independently_cursored() {
        let grid = grid_of(&[&[1, 0], &[0, 1]]);

        let positions = grid
            .enumerate_cells()
            .map(|(pos, _)| (pos.row, pos.col))
            .collect::<Vec<_>>();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        // Two live cursors over the same grid do not disturb each other.
        let mut first = grid.enumerate_cells();
        let mut second = grid.enumerate_cells();
        first.next();
        first.next();
        assert_eq!(
            second.next().map(|(pos, _)| pos),
            Some(Position { row: 0, col: 0 })
        );
        assert_eq!(
            first.next().map(|(pos, _)| pos),
            Some(Position { row: 1, col: 0 })
        );
    }
}
