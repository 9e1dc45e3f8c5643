//! The common structures and traits.

/// The outcome of a finished game, from a fixed global perspective.
///
/// Positive values favor the maximizing player, negative values favor the
/// minimizing player. NaN is not a valid value.
pub type Value = f32;

/// The role of the player whose turn it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    /// Tries to drive the final value up.
    Maximizer,
    /// Tries to drive the final value down.
    Minimizer,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }

    /// The value this player is least happy with, which any real outcome
    /// improves on or matches.
    pub fn worst_value(self) -> Value {
        match self {
            Player::Maximizer => Value::NEG_INFINITY,
            Player::Minimizer => Value::INFINITY,
        }
    }

    /// Whether this player strictly prefers `a` over `b`.
    pub fn prefers(self, a: Value, b: Value) -> bool {
        match self {
            Player::Maximizer => a > b,
            Player::Minimizer => a < b,
        }
    }
}

/// One position of a two-player, zero-sum, perfect-information game.
///
/// Implementors have value semantics: strategies clone a state before
/// applying a move to it, and never modify a state they were handed.
pub trait GameState: Clone {
    /// The type of game moves.
    type M: Clone;

    /// Whether the game is over at this position.
    fn is_terminal(&self) -> bool;

    /// The final value of a terminal position.
    ///
    /// Only called on states where `is_terminal` returns true.
    fn terminal_value(&self) -> Value;

    /// Which role the player to act has.
    fn player_to_move(&self) -> Player;

    /// Append the legal moves at this non-terminal position to `moves`.
    ///
    /// Moves must be distinct. Their order is up to the game; it never
    /// changes the value of a search, but earlier moves win ties, and good
    /// moves first lets alpha-beta prune more.
    fn generate_moves(&self, moves: &mut Vec<Self::M>);

    /// Change the state so that the move is applied.
    ///
    /// `m` must have been generated from this exact state.
    fn apply_move(&mut self, m: &Self::M);
}

/// Defines a method of choosing a move for the current player.
pub trait Strategy<S: GameState> {
    /// Returns `None` if there is no move to make, e.g. the state is terminal.
    fn choose_move(&mut self, s: &S) -> Option<S::M>;
}
