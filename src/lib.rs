//! Optimal move search for two-player, zero-sum, perfect-information games.
//!
//! Implement [`GameState`] for a game's positions, then call
//! [`find_optimal_move`], or keep an [`AlphaBeta`] engine around to reuse its
//! buffers and read statistics about each search.

pub mod interface;
pub mod strategies;
pub mod util;

pub use interface::{GameState, Player, Strategy, Value};
pub use strategies::alpha_beta::{find_optimal_move, AlphaBeta, AlphaBetaOptions};
pub use strategies::random::Random;
