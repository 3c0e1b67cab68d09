pub mod codec;
pub mod error;
pub mod grid;
pub mod pos;

pub use error::GridError;
pub use grid::{CellState, Grid};
pub use pos::Position;
