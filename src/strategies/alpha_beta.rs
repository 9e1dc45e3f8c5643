//! An implementation of minimax with alpha-beta pruning.
//!
//! The search runs all the way down to terminal positions, so it only suits
//! games small enough to be solved outright. Among equally good moves, the one
//! generated first is chosen, so it's deterministic.

use super::super::interface::*;
use super::util::*;

use std::time::{Duration, Instant};

// A value, and the move at the current node that leads to it.
// The move is missing for terminal positions and for a node that hasn't
// looked at any of its moves yet.
struct ValuedMove<M> {
    value: Value,
    m: Option<M>,
}

impl<M: Clone> ValuedMove<M> {
    // Take (value, m) if it's strictly better for player.
    // Ties keep the earlier move.
    fn improve(&mut self, player: Player, value: Value, m: &M) {
        if self.m.is_none() || player.prefers(value, self.value) {
            self.value = value;
            self.m = Some(m.clone());
        }
    }
}

/// Options to use for the alpha-beta engine.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBetaOptions {
    pruning: bool,
}

impl AlphaBetaOptions {
    pub fn new() -> Self {
        AlphaBetaOptions { pruning: true }
    }
}

impl Default for AlphaBetaOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaOptions {
    /// Whether to stop exploring a node's moves once they can no longer
    /// affect the result. Without it, this is plain minimax.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

pub struct AlphaBeta<S: GameState> {
    opts: AlphaBetaOptions,
    move_pool: MovePool<S::M>,
    prev_value: Option<Value>,

    // Runtime stats for the last move generated.
    nodes_explored: usize,
    cutoffs: usize,
    wall_time: Duration,
}

impl<S: GameState> AlphaBeta<S> {
    pub fn new() -> Self {
        Self::with_options(AlphaBetaOptions::new())
    }

    pub fn with_options(opts: AlphaBetaOptions) -> Self {
        AlphaBeta {
            opts,
            move_pool: MovePool::default(),
            prev_value: None,
            nodes_explored: 0,
            cutoffs: 0,
            wall_time: Duration::default(),
        }
    }

    /// Value of the root under perfect play, from the last search that found
    /// a move.
    pub fn root_value(&self) -> Option<Value> {
        self.prev_value
    }

    /// Positions visited by the last search, including the root.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Number of nodes whose remaining moves were skipped in the last search.
    pub fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    pub fn wall_time(&self) -> Duration {
        self.wall_time
    }

    /// Return a human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        let throughput = self.nodes_explored as f64 / self.wall_time.as_secs_f64();
        let root_value = match self.prev_value {
            Some(value) => value.to_string(),
            None => "unknown".to_string(),
        };
        format!(
            "Explored {} nodes with {} cutoffs.\nRoot value is {}.\n{} nodes/sec",
            self.nodes_explored, self.cutoffs, root_value, throughput as usize
        )
    }

    fn search(&mut self, s: &S, mut alpha: Value, mut beta: Value) -> ValuedMove<S::M> {
        self.nodes_explored += 1;
        if s.is_terminal() {
            let value = s.terminal_value();
            debug_assert!(!value.is_nan());
            return ValuedMove { value, m: None };
        }

        let player = s.player_to_move();
        let mut best = ValuedMove { value: player.worst_value(), m: None };
        let mut moves = self.move_pool.alloc();
        s.generate_moves(&mut moves);
        for m in moves.iter() {
            let mut child = s.clone();
            child.apply_move(m);
            let value = self.search(&child, alpha, beta).value;
            best.improve(player, value, m);
            match player {
                Player::Maximizer => alpha = alpha.max(best.value),
                Player::Minimizer => beta = beta.min(best.value),
            }
            if self.opts.pruning && alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }
        self.move_pool.free(moves);
        best
    }
}

impl<S: GameState> Default for AlphaBeta<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Strategy<S> for AlphaBeta<S> {
    fn choose_move(&mut self, s: &S) -> Option<S::M> {
        self.nodes_explored = 0;
        self.cutoffs = 0;
        self.prev_value = None;
        let start_time = Instant::now();

        let best = self.search(s, Value::NEG_INFINITY, Value::INFINITY);

        self.wall_time = start_time.elapsed();
        if best.m.is_some() {
            self.prev_value = Some(best.value);
        }
        best.m
    }
}

/// Find the best move for the player to act, assuming both players play
/// perfectly from here on. Ties go to the move generated first.
///
/// # Panics
///
/// If `state` is terminal or has no legal moves, since there is no move to
/// return.
pub fn find_optimal_move<S: GameState>(state: &S) -> S::M {
    match AlphaBeta::<S>::new().choose_move(state) {
        Some(m) => m,
        None => panic!("find_optimal_move: no move to choose, the state is terminal or has no legal moves"),
    }
}
