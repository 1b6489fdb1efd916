//! Fixed-depth minimax move selection.

use std::time::Instant;

use log::debug;
use smallvec::SmallVec;

use crate::board::{geometry, quadrant, Board, CORNERS};
use crate::core::{GameRng, Move, PieceColor, RotationChoice};

use super::config::SearchConfig;
use super::eval::evaluate;
use super::node::SearchNode;
use super::stats::SearchStats;

/// Fixed-depth minimax driver.
///
/// Walks the [`SearchNode`] tree depth-first to `max_ply`, maximizing
/// at nodes where the root player moves and minimizing elsewhere, and
/// scores leaves with the weighted heuristic in [`super::eval`] — always
/// from the root player's point of view. The whole search is
/// brute-force and synchronous: every candidate move (empty cell × 8
/// rotations) is expanded at every interior node.
///
/// Ties at the extreme utility are broken by preferring moves whose
/// piece does not end on one of the board's four corner cells once the
/// move's own rotation is accounted for, drawing uniformly at random
/// from the preferred set via the injected [`GameRng`].
pub struct Minimax {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl Minimax {
    /// Create a search driver.
    ///
    /// # Panics
    ///
    /// Panics if `config.max_ply` is 0: the root would be evaluated in
    /// place and no move could be selected.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        assert!(config.max_ply >= 1, "max_ply must be at least 1");
        let rng = match config.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            rng,
            stats: SearchStats::new(),
        }
    }

    /// Choose a move for `mover` on `board`.
    ///
    /// Returns `None` only when the game is already over at the root;
    /// the surrounding loop does not ask for moves on finished boards.
    pub fn run(&mut self, board: &Board, mover: PieceColor) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let mut root = SearchNode::new(board, mover);
        if root.is_terminal() {
            return None;
        }

        self.search(&mut root, 0, mover);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let chosen = root.chosen_move();
        if let Some(mv) = chosen {
            debug!(
                "minimax for {mover}: {mv} (utility {}, {} leaves, {} nodes, {}us)",
                root.utility().unwrap_or_default(),
                self.stats.leaves_evaluated,
                self.stats.nodes_expanded,
                self.stats.time_us,
            );
        }
        chosen
    }

    /// Counters from the most recent [`run`](Self::run).
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The configuration this driver was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search(&mut self, node: &mut SearchNode, ply: u32, root_player: PieceColor) -> i32 {
        if ply == self.config.max_ply || node.is_terminal() {
            let score = evaluate(node.board(), root_player);
            node.set_utility(score);
            self.stats.leaves_evaluated += 1;
            return score;
        }
        let maximizing = node.mover() == root_player;
        self.expand(node, ply, root_player, maximizing)
    }

    fn expand(
        &mut self,
        node: &mut SearchNode,
        ply: u32,
        root_player: PieceColor,
        maximizing: bool,
    ) -> i32 {
        let moves = node.available_moves();
        assert!(
            !moves.is_empty(),
            "unfinished position must offer at least one move"
        );

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut tied: SmallVec<[Move; 8]> = SmallVec::new();

        for mv in moves {
            let mut child = node.child(mv);
            let score = self.search(&mut child, ply + 1, root_player);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                tied.clear();
                tied.push(mv);
            } else if score == best_score {
                tied.push(mv);
            }
        }

        self.stats.nodes_expanded += 1;
        let chosen = self.break_tie(&tied);
        node.set_chosen_move(chosen);
        node.set_utility(best_score);
        best_score
    }

    /// Pick one move out of a set sharing the extreme utility.
    ///
    /// Moves that would leave the just-placed piece on a true corner
    /// are avoided when any alternative exists; the final pick within
    /// the surviving set is uniformly random.
    fn break_tie(&mut self, tied: &[Move]) -> Move {
        debug_assert!(!tied.is_empty());
        if tied.len() == 1 {
            return tied[0];
        }
        let preferred: SmallVec<[Move; 8]> = tied
            .iter()
            .copied()
            .filter(|&mv| !ends_on_corner(mv))
            .collect();
        let pool: &[Move] = if preferred.is_empty() { tied } else { &preferred };
        pool[self.rng.gen_index(0..pool.len())]
    }
}

/// Whether the piece placed by `mv` sits on one of the four corner
/// cells after the move's rotation.
///
/// Rotating a different quadrant than the one placed into leaves the
/// piece where it was put; rotating the same quadrant carries the piece
/// along the rotation's relabeling.
fn ends_on_corner(mv: Move) -> bool {
    let placement = mv.placement;
    let local = (placement.cell() - 1) as usize;
    let final_local = match mv.rotation {
        RotationChoice::Rotate { quadrant, direction } if quadrant == placement.quadrant() => {
            quadrant::destination_of(local, direction)
        }
        _ => local,
    };
    let address = geometry::global_of(placement.quadrant(), final_local as u8 + 1);
    CORNERS.contains(&address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceColor::Red;
    use crate::core::{Placement, RotationDirection};

    fn mv(placement: (u8, u8), rotation: RotationChoice) -> Move {
        Move::new(Placement::new(placement.0, placement.1), rotation)
    }

    #[test]
    fn test_ends_on_corner_without_own_rotation() {
        let other = RotationChoice::rotate(2, RotationDirection::Clockwise);
        // Quadrant 1 cell 1 is global (0, 0).
        assert!(ends_on_corner(mv((1, 1), other)));
        assert!(ends_on_corner(mv((4, 9), other)));
        assert!(!ends_on_corner(mv((1, 5), other)));
        // Inner corners of the quadrants are not board corners.
        assert!(!ends_on_corner(mv((1, 9), other)));
        assert!(ends_on_corner(mv((2, 3), RotationChoice::Skip)));
    }

    #[test]
    fn test_ends_on_corner_carried_by_own_rotation() {
        // Quadrant 1 cell 7 (local bottom-left) swings onto (0, 0)
        // clockwise, and cell 3 swings onto it anti-clockwise.
        assert!(ends_on_corner(mv(
            (1, 7),
            RotationChoice::rotate(1, RotationDirection::Clockwise)
        )));
        assert!(ends_on_corner(mv(
            (1, 3),
            RotationChoice::rotate(1, RotationDirection::AntiClockwise)
        )));
        // The same placements rotated the other way end elsewhere.
        assert!(!ends_on_corner(mv(
            (1, 7),
            RotationChoice::rotate(1, RotationDirection::AntiClockwise)
        )));
        // A corner placement rotated away stops being a corner.
        assert!(!ends_on_corner(mv(
            (1, 1),
            RotationChoice::rotate(1, RotationDirection::Clockwise)
        )));
    }

    #[test]
    fn test_break_tie_avoids_corners_when_possible() {
        let mut search = Minimax::new(SearchConfig::default().with_seed(11));
        let corner = mv((1, 1), RotationChoice::rotate(3, RotationDirection::Clockwise));
        let center = mv((1, 5), RotationChoice::rotate(3, RotationDirection::Clockwise));
        for _ in 0..32 {
            assert_eq!(search.break_tie(&[corner, center]), center);
        }
    }

    #[test]
    fn test_break_tie_falls_back_to_full_set() {
        let mut search = Minimax::new(SearchConfig::default().with_seed(11));
        let a = mv((1, 1), RotationChoice::rotate(3, RotationDirection::Clockwise));
        let b = mv((4, 9), RotationChoice::rotate(3, RotationDirection::Clockwise));
        let picked = search.break_tie(&[a, b]);
        assert!(picked == a || picked == b);
    }

    #[test]
    #[should_panic(expected = "max_ply must be at least 1")]
    fn test_zero_ply_config_is_rejected() {
        let _ = Minimax::new(SearchConfig::default().with_max_ply(0));
    }

    #[test]
    fn test_run_on_finished_board_returns_none() {
        let mut board = Board::new();
        for cell in [1u8, 2, 3] {
            board.place(Red, Placement::new(1, cell));
        }
        board.place(Red, Placement::new(2, 1));
        board.place(Red, Placement::new(2, 2));
        assert!(board.has_winner());

        let mut search = Minimax::new(SearchConfig::default().with_seed(1));
        assert!(search.run(&board, Red).is_none());
    }
}
