//! Utility functions for testing, and tests.

use super::interface::*;

/// Play a game to the end from `state`, with `max_strategy` moving for the
/// maximizer and `min_strategy` for the minimizer.
///
/// Returns the terminal value, or `None` if a strategy gave up with no move
/// before the game ended.
pub fn battle_royale<S, S1, S2>(
    mut state: S, max_strategy: &mut S1, min_strategy: &mut S2,
) -> Option<Value>
where
    S: GameState,
    S1: Strategy<S>,
    S2: Strategy<S>,
{
    while !state.is_terminal() {
        let m = match state.player_to_move() {
            Player::Maximizer => max_strategy.choose_move(&state),
            Player::Minimizer => min_strategy.choose_move(&state),
        }?;
        state.apply_move(&m);
    }
    Some(state.terminal_value())
}
