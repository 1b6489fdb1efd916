//! The 6×6 game board: placement, rotation, and line queries.

use std::fmt;

use crate::core::{Cell, PieceColor, Placement, RotationDirection};

use super::geometry::{self, BOARD_SIZE, LINES, WIN_LENGTH};
use super::quadrant::Quadrant;

/// Number of quadrants on the board.
pub const QUADRANT_COUNT: usize = 4;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The Pentago board: four [`Quadrant`]s in a 2×2 layout forming a
/// logical 6×6 grid.
///
/// Quadrant 1 covers rows/columns `[0, 3)`, quadrant 2 rows `[0, 3)` ×
/// columns `[3, 6)`, and so on row-major. Occupied cells only ever
/// increase; the search copies boards instead of undoing moves, so no
/// operation removes a piece.
///
/// All win and heuristic queries are windowed matches over the fixed
/// line set in [`geometry`], which uniformly covers runs that cross
/// quadrant boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    quadrants: [Quadrant; QUADRANT_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quadrants: [Quadrant::new(); QUADRANT_COUNT],
        }
    }

    /// The quadrant with 1-based `number`.
    ///
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=4`.
    #[must_use]
    pub fn quadrant(&self, number: u8) -> &Quadrant {
        assert!((1..=4).contains(&number), "quadrant must be 1-4, got {number}");
        &self.quadrants[(number - 1) as usize]
    }

    /// The cell at global `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 6)`.
    #[must_use]
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "coordinates must be in [0, 6), got ({row}, {col})"
        );
        let (slot, local) = geometry::slot_of(row, col);
        self.quadrants[slot].get_index(local)
    }

    /// Whether the addressed cell already holds a piece.
    #[must_use]
    pub fn is_occupied(&self, placement: Placement) -> bool {
        let (slot, local) = placement_slot(placement);
        self.quadrants[slot].get_index(local).is_some()
    }

    /// Put `color` on the addressed cell.
    ///
    /// The cell must be empty; the surrounding loop checks
    /// [`is_occupied`](Self::is_occupied) before calling.
    pub fn place(&mut self, color: PieceColor, placement: Placement) {
        let (slot, local) = placement_slot(placement);
        let quadrant = &mut self.quadrants[slot];
        debug_assert!(quadrant.get_index(local).is_none(), "cell {placement} already occupied");
        quadrant.set(local / 3, local % 3, color);
    }

    /// Rotate the quadrant with 1-based `number` by 90 degrees.
    ///
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=4`.
    pub fn rotate(&mut self, number: u8, direction: RotationDirection) {
        assert!((1..=4).contains(&number), "quadrant must be 1-4, got {number}");
        self.quadrants[(number - 1) as usize].rotate(direction);
    }

    /// Whether `color` has five consecutive pieces along any line.
    #[must_use]
    pub fn has_winning_line(&self, color: PieceColor) -> bool {
        LINES
            .iter()
            .any(|line| line.windows(WIN_LENGTH).any(|window| self.window_filled(window, color)))
    }

    /// Whether either color has won.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        PieceColor::all().iter().any(|&color| self.has_winning_line(color))
    }

    /// The winning color, if any.
    ///
    /// Red is checked first; a board where a rotation completed five in
    /// a row for both colors at once reports red. Returns `None` for
    /// both unfinished games and ties — callers distinguish those via
    /// [`is_finished`](Self::is_finished).
    #[must_use]
    pub fn winner(&self) -> Option<PieceColor> {
        PieceColor::all().into_iter().find(|&color| self.has_winning_line(color))
    }

    /// Whether the game is over: someone won, or the board is full.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.has_winner() || self.is_full()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.quadrants.iter().all(Quadrant::is_full)
    }

    /// Number of windows of exactly `length` consecutive `color` cells
    /// along any line.
    ///
    /// Windows may overlap, and windows inside a longer run (including a
    /// winning five) all count; there is no deduplication. Used by the
    /// search heuristic with lengths 3 and 4.
    ///
    /// # Panics
    ///
    /// Panics if `length` is not 3 or 4.
    #[must_use]
    pub fn count_runs(&self, color: PieceColor, length: usize) -> usize {
        assert!(length == 3 || length == 4, "run length must be 3 or 4, got {length}");
        LINES
            .iter()
            .flat_map(|line| line.windows(length))
            .filter(|window| self.window_filled(window, color))
            .count()
    }

    /// Number of `color` pieces in the interior 4×4 sub-grid (global
    /// rows and columns 1 through 4).
    #[must_use]
    pub fn center_piece_count(&self, color: PieceColor) -> usize {
        (1..=4u8)
            .flat_map(|row| (1..=4u8).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cell(row, col) == Some(color))
            .count()
    }

    /// All empty addresses, in ascending quadrant then cell order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Placement> + '_ {
        self.quadrants.iter().enumerate().flat_map(|(slot, quadrant)| {
            quadrant
                .empty_cells()
                .map(move |cell| Placement::new(slot as u8 + 1, cell))
        })
    }

    /// Whether at least one quadrant is unchanged by rotation.
    ///
    /// Gates the "skip rotation" option offered to human players.
    #[must_use]
    pub fn has_rotation_invariant_quadrant(&self) -> bool {
        self.quadrants.iter().any(Quadrant::is_rotation_invariant)
    }

    fn window_filled(&self, window: &[(u8, u8)], color: PieceColor) -> bool {
        window.iter().all(|&(row, col)| {
            let (slot, local) = geometry::slot_of(row, col);
            self.quadrants[slot].get_index(local) == Some(color)
        })
    }
}

fn placement_slot(placement: Placement) -> (usize, usize) {
    (
        (placement.quadrant() - 1) as usize,
        (placement.cell() - 1) as usize,
    )
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "+-------+-------+";
        for row in 0..BOARD_SIZE as u8 {
            if row % 3 == 0 {
                writeln!(f, "{RULE}")?;
            }
            for col in 0..BOARD_SIZE as u8 {
                if col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.cell(row, col) {
                    Some(color) => write!(f, "{color} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{RULE}")
    }
}
