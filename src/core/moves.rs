//! Move and rotation value types with their textual encoding.
//!
//! The surrounding game loop exchanges moves as two independent tokens:
//!
//! - placement `"B C"` — quadrant `B` in `1..=4` (row-major from the
//!   top-left), one space, cell `C` in `1..=9` (row-major within the
//!   quadrant);
//! - rotation `"B R"` with `R` either `'c'` (clockwise) or `'a'`
//!   (anti-clockwise), or the single character `"s"` to skip.
//!
//! `Display` produces exactly these shapes and `FromStr` accepts exactly
//! these shapes; anything else is a [`ParseMoveError`]. Range checking
//! happens at parse time, so a constructed value is always in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error for a malformed placement or rotation token.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Placement token did not match `"B C"` with `B` in 1-4 and `C` in 1-9.
    #[error("placement must look like \"B C\" with B in 1-4 and C in 1-9")]
    InvalidPlacement,
    /// Rotation token did not match `"B R"` (`R` being `c` or `a`) or `"s"`.
    #[error("rotation must look like \"B R\" with B in 1-4 and R 'c' or 'a', or \"s\"")]
    InvalidRotation,
}

/// A piece placement: quadrant number 1-4 and local cell number 1-9.
///
/// Both numbers are row-major: quadrant 1 is top-left and 4 bottom-right;
/// cell 1 is the quadrant's top-left corner and 9 its bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    quadrant: u8,
    cell: u8,
}

impl Placement {
    /// Create a placement.
    ///
    /// # Panics
    ///
    /// Panics if `quadrant` is outside `1..=4` or `cell` outside `1..=9`;
    /// out-of-range addresses are caller bugs.
    #[must_use]
    pub fn new(quadrant: u8, cell: u8) -> Self {
        assert!((1..=4).contains(&quadrant), "quadrant must be 1-4, got {quadrant}");
        assert!((1..=9).contains(&cell), "cell must be 1-9, got {cell}");
        Self { quadrant, cell }
    }

    /// Quadrant number, 1-4.
    #[inline]
    #[must_use]
    pub const fn quadrant(self) -> u8 {
        self.quadrant
    }

    /// Cell number within the quadrant, 1-9.
    #[inline]
    #[must_use]
    pub const fn cell(self) -> u8 {
        self.cell
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quadrant, self.cell)
    }
}

impl FromStr for Placement {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match bytes {
            [q @ b'1'..=b'4', b' ', c @ b'1'..=b'9'] => {
                Ok(Self { quadrant: q - b'0', cell: c - b'0' })
            }
            _ => Err(ParseMoveError::InvalidPlacement),
        }
    }
}

/// Direction of a 90-degree quadrant rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    AntiClockwise,
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationDirection::Clockwise => write!(f, "c"),
            RotationDirection::AntiClockwise => write!(f, "a"),
        }
    }
}

/// The rotation half of a move: rotate one quadrant, or skip.
///
/// Skipping is legal only while some quadrant is rotation-invariant;
/// the game loop validates that before applying. The search never
/// generates `Skip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationChoice {
    /// Rotate `quadrant` (1-4) in `direction`.
    Rotate {
        quadrant: u8,
        direction: RotationDirection,
    },
    /// Leave the board as placed.
    Skip,
}

impl RotationChoice {
    /// Create a rotation of `quadrant` in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `quadrant` is outside `1..=4`.
    #[must_use]
    pub fn rotate(quadrant: u8, direction: RotationDirection) -> Self {
        assert!((1..=4).contains(&quadrant), "quadrant must be 1-4, got {quadrant}");
        Self::Rotate { quadrant, direction }
    }
}

impl fmt::Display for RotationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationChoice::Rotate { quadrant, direction } => {
                write!(f, "{quadrant} {direction}")
            }
            RotationChoice::Skip => write!(f, "s"),
        }
    }
}

impl FromStr for RotationChoice {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match bytes {
            [b's'] => Ok(Self::Skip),
            [q @ b'1'..=b'4', b' ', b'c'] => Ok(Self::Rotate {
                quadrant: q - b'0',
                direction: RotationDirection::Clockwise,
            }),
            [q @ b'1'..=b'4', b' ', b'a'] => Ok(Self::Rotate {
                quadrant: q - b'0',
                direction: RotationDirection::AntiClockwise,
            }),
            _ => Err(ParseMoveError::InvalidRotation),
        }
    }
}

/// A full move: one placement followed by one rotation choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub placement: Placement,
    pub rotation: RotationChoice,
}

impl Move {
    /// Pair a placement with a rotation choice.
    #[must_use]
    pub const fn new(placement: Placement, rotation: RotationChoice) -> Self {
        Self { placement, rotation }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.placement, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_round_trip() {
        for quadrant in 1..=4u8 {
            for cell in 1..=9u8 {
                let placement = Placement::new(quadrant, cell);
                let text = placement.to_string();
                assert_eq!(text.parse::<Placement>().unwrap(), placement);
            }
        }
    }

    #[test]
    fn test_placement_rejects_bad_shapes() {
        for text in ["", "1", "12", "1 0", "5 3", "1  3", "1 10", "a b", "1-3", "13 "] {
            assert_eq!(
                text.parse::<Placement>(),
                Err(ParseMoveError::InvalidPlacement),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    #[should_panic(expected = "quadrant must be 1-4")]
    fn test_placement_new_rejects_out_of_range() {
        let _ = Placement::new(5, 1);
    }

    #[test]
    fn test_rotation_round_trip() {
        for quadrant in 1..=4u8 {
            for direction in [RotationDirection::Clockwise, RotationDirection::AntiClockwise] {
                let rotation = RotationChoice::rotate(quadrant, direction);
                assert_eq!(rotation.to_string().parse::<RotationChoice>().unwrap(), rotation);
            }
        }
        assert_eq!("s".parse::<RotationChoice>().unwrap(), RotationChoice::Skip);
        assert_eq!(RotationChoice::Skip.to_string(), "s");
    }

    #[test]
    fn test_rotation_rejects_bad_shapes() {
        for text in ["", "ss", "1 s", "0 c", "1 b", "1c", "5 a", " s"] {
            assert_eq!(
                text.parse::<RotationChoice>(),
                Err(ParseMoveError::InvalidRotation),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_move_serde() {
        let mv = Move::new(
            Placement::new(2, 7),
            RotationChoice::rotate(3, RotationDirection::AntiClockwise),
        );
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
