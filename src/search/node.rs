//! One level of the minimax tree: a board snapshot plus the side to move.

use crate::board::Board;
use crate::core::{Move, PieceColor, RotationChoice};

/// A search-tree node: an owned board copy, the player to move, and the
/// evaluation results recorded while the tree above it is walked.
///
/// Every node owns an independent [`Board`]; children are created by
/// copying the parent's board and applying one candidate move, so no
/// undo machinery is needed and siblings never observe each other's
/// mutations. Utility and chosen move are written once, by the search,
/// after the node's subtree has been explored.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    mover: PieceColor,
    opponent: PieceColor,
    utility: Option<i32>,
    chosen: Option<Move>,
}

impl SearchNode {
    /// Create a node over a copy of `board` with `mover` to act.
    #[must_use]
    pub fn new(board: &Board, mover: PieceColor) -> Self {
        Self {
            board: *board,
            mover,
            opponent: mover.opponent(),
            utility: None,
            chosen: None,
        }
    }

    /// The child produced by applying `mv` to a copy of this node's board.
    #[must_use]
    pub fn child(&self, mv: Move) -> Self {
        let mut child = Self::new(&self.board, self.mover);
        child.apply(mv);
        child
    }

    /// Apply a move to this node's own board.
    ///
    /// Places the mover's piece, then applies the rotation — unless the
    /// placement itself just completed five in a row, in which case the
    /// rotation is not performed (the game ends on the placement). A
    /// `Skip` rotation leaves the board as placed and is only legal
    /// while some quadrant is rotation-invariant. The mover and opponent
    /// swap afterwards in every case.
    pub fn apply(&mut self, mv: Move) {
        self.board.place(self.mover, mv.placement);
        if !self.board.has_winner() {
            match mv.rotation {
                RotationChoice::Rotate { quadrant, direction } => {
                    self.board.rotate(quadrant, direction);
                }
                RotationChoice::Skip => {
                    debug_assert!(
                        self.board.has_rotation_invariant_quadrant(),
                        "skip applied with no rotation-invariant quadrant"
                    );
                }
            }
        }
        std::mem::swap(&mut self.mover, &mut self.opponent);
    }

    /// Every candidate move: the cartesian product of the empty cells
    /// with all eight quadrant rotations.
    ///
    /// Skip is never generated here; it is only offered to human players
    /// by the game loop.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Move> {
        use crate::core::RotationDirection::{AntiClockwise, Clockwise};

        let mut moves = Vec::with_capacity(self.board.empty_cells().count() * 8);
        for placement in self.board.empty_cells() {
            for quadrant in 1..=4 {
                for direction in [Clockwise, AntiClockwise] {
                    moves.push(Move::new(placement, RotationChoice::rotate(quadrant, direction)));
                }
            }
        }
        moves
    }

    /// Whether the game is over at this node.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board.is_finished()
    }

    /// The node's board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move at this node.
    #[inline]
    #[must_use]
    pub fn mover(&self) -> PieceColor {
        self.mover
    }

    /// The mover's opponent.
    #[inline]
    #[must_use]
    pub fn opponent(&self) -> PieceColor {
        self.opponent
    }

    /// The utility recorded for this node, once evaluated.
    #[inline]
    #[must_use]
    pub fn utility(&self) -> Option<i32> {
        self.utility
    }

    /// Record this node's utility. Write-once.
    pub fn set_utility(&mut self, utility: i32) {
        debug_assert!(self.utility.is_none(), "utility already recorded");
        self.utility = Some(utility);
    }

    /// The best move recorded at this node, once its children were searched.
    #[inline]
    #[must_use]
    pub fn chosen_move(&self) -> Option<Move> {
        self.chosen
    }

    /// Record the chosen move. Write-once.
    pub fn set_chosen_move(&mut self, mv: Move) {
        debug_assert!(self.chosen.is_none(), "chosen move already recorded");
        self.chosen = Some(mv);
    }
}
