//! Game orchestration: the player seam and the turn-by-turn session.

pub mod player;
pub mod session;

pub use player::{ComputerPlayer, Player};
pub use session::{GameError, GameOutcome, GameSession, Phase};
