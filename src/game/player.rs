//! The player seam between the game loop and move sources.

use log::info;

use crate::board::Board;
use crate::core::{PieceColor, Placement, RotationChoice};
use crate::search::{Minimax, SearchConfig};

/// A source of moves for one side.
///
/// The game loop asks for the placement first, applies it, and — unless
/// the placement won — asks for the rotation. Implementations that
/// decide both halves at once (like [`ComputerPlayer`]) hold the
/// rotation until it is requested.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// The color this player plays.
    fn color(&self) -> PieceColor;

    /// Choose where to place the next piece.
    fn choose_placement(&mut self, board: &Board) -> Placement;

    /// Choose the rotation finishing the current turn.
    fn choose_rotation(&mut self, board: &Board) -> RotationChoice;
}

/// The automated player: one minimax run per turn.
pub struct ComputerPlayer {
    name: String,
    color: PieceColor,
    search: Minimax,
    pending_rotation: Option<RotationChoice>,
}

impl ComputerPlayer {
    /// Create an automated player for `color`.
    #[must_use]
    pub fn new(name: impl Into<String>, color: PieceColor, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            color,
            search: Minimax::new(config),
            pending_rotation: None,
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PieceColor {
        self.color
    }

    fn choose_placement(&mut self, board: &Board) -> Placement {
        let mv = self
            .search
            .run(board, self.color)
            .expect("asked for a move on a finished board");
        info!(
            "{} ({}) plays {} after {} leaf evaluations",
            self.name,
            self.color,
            mv,
            self.search.stats().leaves_evaluated
        );
        self.pending_rotation = Some(mv.rotation);
        mv.placement
    }

    fn choose_rotation(&mut self, _board: &Board) -> RotationChoice {
        self.pending_rotation
            .take()
            .expect("rotation requested before a placement was chosen")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceColor::Red;

    #[test]
    fn test_computer_player_pairs_placement_with_rotation() {
        let board = Board::new();
        let mut player =
            ComputerPlayer::new("Computer", Red, SearchConfig::default().with_max_ply(1).with_seed(3));

        let placement = player.choose_placement(&board);
        assert!(!board.is_occupied(placement));

        let rotation = player.choose_rotation(&board);
        assert_ne!(rotation, RotationChoice::Skip, "the search never skips");
    }
}
