//! Piece colors and cell contents.
//!
//! Pentago has exactly two piece colors. An empty cell is a third,
//! distinct state and is modeled as `None`, never as a color.

use serde::{Deserialize, Serialize};

/// One of the two piece colors.
///
/// Colors compare by value and carry no behavior of their own beyond
/// knowing their opponent; everything else (win detection, scoring)
/// treats both colors identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Black,
}

impl PieceColor {
    /// The other color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }

    /// Both colors, red first.
    #[must_use]
    pub const fn all() -> [PieceColor; 2] {
        [PieceColor::Red, PieceColor::Black]
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::Red => write!(f, "R"),
            PieceColor::Black => write!(f, "B"),
        }
    }
}

/// Contents of one board cell: empty, or occupied by one color.
///
/// Cells start empty and transition at most once to occupied; normal
/// play never clears a cell (the search copies boards instead of
/// undoing moves).
pub type Cell = Option<PieceColor>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        for color in PieceColor::all() {
            assert_eq!(color.opponent().opponent(), color);
            assert_ne!(color.opponent(), color);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PieceColor::Red.to_string(), "R");
        assert_eq!(PieceColor::Black.to_string(), "B");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PieceColor::Red).unwrap();
        let back: PieceColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PieceColor::Red);
    }
}
