//! # pentago
//!
//! A Pentago engine: two players alternately place a piece on a 6×6
//! board of four rotatable 3×3 quadrants, then rotate one quadrant 90
//! degrees (or skip, while a quadrant is rotation-invariant). Five
//! collinear same-color pieces win; a full board without five is a tie.
//!
//! ## Design Principles
//!
//! 1. **One line abstraction**: every win and heuristic query is a
//!    windowed match over the fixed set of rows, columns, and diagonals
//!    of length ≥ 5, so runs crossing quadrant boundaries need no
//!    special cases.
//!
//! 2. **Copy-on-branch**: the board is a small value type; each search
//!    node owns its own copy, so the search needs no undo machinery and
//!    no sharing discipline.
//!
//! 3. **Injectable randomness**: the only random choice — tie-breaking
//!    between equally scored moves — goes through a seedable RNG, so
//!    tests can pin outcomes exactly.
//!
//! ## Modules
//!
//! - `core`: piece colors, move values and their textual encoding, RNG
//! - `board`: quadrants, line geometry, and the 6×6 board engine
//! - `search`: fixed-depth minimax with heuristic leaf evaluation
//! - `game`: player seam and turn orchestration

pub mod board;
pub mod core;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Cell, GameRng, Move, ParseMoveError, PieceColor, Placement, RotationChoice, RotationDirection,
};

pub use crate::board::{Board, Quadrant, BOARD_SIZE, WIN_LENGTH};

pub use crate::search::{Minimax, SearchConfig, SearchNode, SearchStats};

pub use crate::game::{ComputerPlayer, GameError, GameOutcome, GameSession, Phase, Player};
