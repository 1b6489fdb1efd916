//! Core types: piece colors, move values and their textual encoding, RNG.
//!
//! These are the building blocks shared by the board engine, the search,
//! and the game loop.

pub mod color;
pub mod moves;
pub mod rng;

pub use color::{Cell, PieceColor};
pub use moves::{Move, ParseMoveError, Placement, RotationChoice, RotationDirection};
pub use rng::GameRng;
