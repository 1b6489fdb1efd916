//! Line and coordinate geometry of the 6×6 board.
//!
//! Win detection and the run counters are all expressed as windowed
//! matches over one fixed set of lines: the 6 rows, the 6 columns, the
//! 2 full diagonals, and the 4 length-5 diagonals offset by one from
//! them. Working over this set handles quadrant-boundary crossings with
//! a single rule instead of per-boundary special cases.
//!
//! Coordinates are global `(row, col)` pairs in `[0, 6)²`; row 0 is the
//! top of the board. This module also owns the mapping between global
//! coordinates and the external 1-based `(quadrant, cell)` addressing.

/// Side length of the full board.
pub const BOARD_SIZE: usize = 6;

/// Number of maximal lines with length ≥ 5.
pub const LINE_COUNT: usize = 18;

/// Window length that wins the game.
pub const WIN_LENGTH: usize = 5;

/// The four true corner cells of the board.
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 5), (5, 0), (5, 5)];

/// A maximal row, column, or diagonal of length 5 or 6.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    cells: [(u8, u8); BOARD_SIZE],
    len: u8,
}

impl Line {
    /// The cells of this line in order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells[..self.len as usize]
    }

    /// All windows of `length` consecutive cells along this line.
    ///
    /// Empty if the line is shorter than `length`.
    pub fn windows(&self, length: usize) -> impl Iterator<Item = &[(u8, u8)]> {
        // slice::windows panics on 0; a zero-length window is meaningless here.
        debug_assert!(length > 0);
        self.cells().windows(length)
    }
}

/// Every line of the board: rows, columns, then diagonals.
pub static LINES: [Line; LINE_COUNT] = build_lines();

const EMPTY_LINE: Line = Line {
    cells: [(0, 0); BOARD_SIZE],
    len: 0,
};

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [EMPTY_LINE; LINE_COUNT];
    let mut next = 0;

    // Rows and columns.
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[next].cells[j] = (i as u8, j as u8);
            lines[next + 1].cells[j] = (j as u8, i as u8);
            j += 1;
        }
        lines[next].len = BOARD_SIZE as u8;
        lines[next + 1].len = BOARD_SIZE as u8;
        next += 2;
        i += 1;
    }

    // Full diagonals: main (top-left to bottom-right) and anti.
    let mut i = 0;
    while i < BOARD_SIZE {
        lines[next].cells[i] = (i as u8, i as u8);
        lines[next + 1].cells[i] = (i as u8, (BOARD_SIZE - 1 - i) as u8);
        i += 1;
    }
    lines[next].len = BOARD_SIZE as u8;
    lines[next + 1].len = BOARD_SIZE as u8;
    next += 2;

    // Length-5 diagonals offset by one from each full diagonal.
    let mut i = 0;
    while i < WIN_LENGTH {
        lines[next].cells[i] = (i as u8, i as u8 + 1);
        lines[next + 1].cells[i] = (i as u8 + 1, i as u8);
        lines[next + 2].cells[i] = (i as u8, (WIN_LENGTH - 1 - i) as u8);
        lines[next + 3].cells[i] = (i as u8 + 1, (BOARD_SIZE - 1 - i) as u8);
        i += 1;
    }
    let mut k = 0;
    while k < 4 {
        lines[next + k].len = WIN_LENGTH as u8;
        k += 1;
    }

    lines
}

/// Global coordinates of a 1-based `(quadrant, cell)` address.
///
/// Quadrants are numbered row-major (1 = top-left, 4 = bottom-right),
/// cells row-major within the quadrant.
#[inline]
#[must_use]
pub const fn global_of(quadrant: u8, cell: u8) -> (u8, u8) {
    let quadrant_index = (quadrant - 1) as usize;
    let local = (cell - 1) as usize;
    (
        ((quadrant_index / 2) * 3 + local / 3) as u8,
        ((quadrant_index % 2) * 3 + local % 3) as u8,
    )
}

/// The `(quadrant array index, local cell index)` pair covering a
/// global coordinate; both 0-based.
#[inline]
#[must_use]
pub(crate) const fn slot_of(row: u8, col: u8) -> (usize, usize) {
    let (row, col) = (row as usize, col as usize);
    ((row / 3) * 2 + col / 3, (row % 3) * 3 + col % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_set_shape() {
        let six: Vec<_> = LINES.iter().filter(|l| l.cells().len() == 6).collect();
        let five: Vec<_> = LINES.iter().filter(|l| l.cells().len() == 5).collect();
        assert_eq!(six.len(), 14, "6 rows + 6 columns + 2 full diagonals");
        assert_eq!(five.len(), 4, "4 offset diagonals");
    }

    #[test]
    fn test_every_line_cell_in_bounds_and_collinear() {
        for line in &LINES {
            let cells = line.cells();
            for &(row, col) in cells {
                assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
            }
            // Constant step between consecutive cells.
            let step = (
                cells[1].0 as i8 - cells[0].0 as i8,
                cells[1].1 as i8 - cells[0].1 as i8,
            );
            for pair in cells.windows(2) {
                assert_eq!(pair[1].0 as i8 - pair[0].0 as i8, step.0);
                assert_eq!(pair[1].1 as i8 - pair[0].1 as i8, step.1);
            }
        }
    }

    #[test]
    fn test_window_counts() {
        let total: usize = LINES.iter().map(|l| l.windows(WIN_LENGTH).count()).sum();
        // 14 length-6 lines contribute two 5-windows each, 4 length-5
        // lines contribute one.
        assert_eq!(total, 14 * 2 + 4);
    }

    #[test]
    fn test_global_of_quadrant_origins() {
        assert_eq!(global_of(1, 1), (0, 0));
        assert_eq!(global_of(2, 1), (0, 3));
        assert_eq!(global_of(3, 1), (3, 0));
        assert_eq!(global_of(4, 1), (3, 3));
        assert_eq!(global_of(4, 9), (5, 5));
        assert_eq!(global_of(2, 3), (0, 5));
    }

    #[test]
    fn test_global_and_slot_agree() {
        for quadrant in 1..=4u8 {
            for cell in 1..=9u8 {
                let (row, col) = global_of(quadrant, cell);
                let (slot, local) = slot_of(row, col);
                assert_eq!(slot, (quadrant - 1) as usize);
                assert_eq!(local, (cell - 1) as usize);
            }
        }
    }
}
