//! Board engine: quadrants, line geometry, and the 6×6 board.

pub mod board;
pub mod geometry;
pub mod quadrant;

pub use board::{Board, BOARD_CELLS, QUADRANT_COUNT};
pub use geometry::{Line, BOARD_SIZE, CORNERS, LINES, LINE_COUNT, WIN_LENGTH};
pub use quadrant::{Quadrant, QUADRANT_CELLS, QUADRANT_SIZE};
