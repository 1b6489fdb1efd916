//! Turn orchestration and rule validation for a full game.

use crate::board::Board;
use crate::core::{PieceColor, Placement, RotationChoice};

/// Error for a game action that violates the rules or the turn protocol.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// The addressed cell already holds a piece.
    #[error("cell \"{0}\" is already occupied")]
    CellOccupied(Placement),
    /// Skip was requested while no quadrant is rotation-invariant.
    #[error("rotation cannot be skipped: no quadrant is rotation-invariant")]
    SkipNotAllowed,
    /// The game is over; no further actions are accepted.
    #[error("the game is already finished")]
    GameFinished,
    /// A rotation arrived while a placement was expected.
    #[error("a placement is expected before the rotation")]
    PlacementExpected,
    /// A placement arrived while the turn's rotation was still pending.
    #[error("the current turn's rotation is still pending")]
    RotationExpected,
}

/// What the session expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The current player must place a piece.
    AwaitingPlacement,
    /// The current player must rotate a quadrant (or skip, if legal).
    AwaitingRotation,
    /// The game is over.
    Finished,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PieceColor),
    Tie,
}

/// A running game: the board plus whose turn it is and which half of
/// the turn comes next.
///
/// Each turn is a placement followed by a rotation. A placement that
/// completes five in a row ends the game immediately — the rotation
/// phase is suppressed. A full board still rotates (the rotation can
/// turn a would-be tie into a win); the game only settles after it.
/// Red moves first.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: PieceColor,
    phase: Phase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a fresh game with red to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: PieceColor::Red,
            phase: Phase::AwaitingPlacement,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// What the session expects next.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The result, once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(match self.board.winner() {
            Some(color) => GameOutcome::Winner(color),
            None => GameOutcome::Tie,
        })
    }

    /// Place the current player's piece.
    ///
    /// On success the session moves to the rotation phase, or straight
    /// to [`Phase::Finished`] when the placement wins the game.
    pub fn place(&mut self, placement: Placement) -> Result<(), GameError> {
        match self.phase {
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::AwaitingRotation => return Err(GameError::RotationExpected),
            Phase::AwaitingPlacement => {}
        }
        if self.board.is_occupied(placement) {
            return Err(GameError::CellOccupied(placement));
        }

        self.board.place(self.turn, placement);
        if self.board.has_winner() {
            self.phase = Phase::Finished;
        } else {
            self.phase = Phase::AwaitingRotation;
        }
        Ok(())
    }

    /// Rotate a quadrant (or skip) to finish the current turn.
    ///
    /// On success the turn passes to the other player, unless the
    /// rotation finished the game.
    pub fn rotate(&mut self, choice: RotationChoice) -> Result<(), GameError> {
        match self.phase {
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::AwaitingPlacement => return Err(GameError::PlacementExpected),
            Phase::AwaitingRotation => {}
        }
        match choice {
            RotationChoice::Skip => {
                if !self.board.has_rotation_invariant_quadrant() {
                    return Err(GameError::SkipNotAllowed);
                }
            }
            RotationChoice::Rotate { quadrant, direction } => {
                self.board.rotate(quadrant, direction);
            }
        }

        if self.board.is_finished() {
            self.phase = Phase::Finished;
        } else {
            self.turn = self.turn.opponent();
            self.phase = Phase::AwaitingPlacement;
        }
        Ok(())
    }
}
