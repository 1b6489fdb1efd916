//! Fixed-depth adversarial search for the automated player.
//!
//! [`Minimax`] walks a tree of [`SearchNode`]s — each an independent
//! board copy — to a configured depth, scores leaves with the weighted
//! heuristic in [`eval`], and breaks utility ties with a corner-averse
//! randomized policy.

pub mod config;
pub mod eval;
pub mod minimax;
pub mod node;
pub mod stats;

pub use config::SearchConfig;
pub use eval::{evaluate, CENTER_WEIGHT, FOUR_RUN_WEIGHT, THREE_RUN_WEIGHT, WIN_WEIGHT};
pub use minimax::Minimax;
pub use node::SearchNode;
pub use stats::SearchStats;
