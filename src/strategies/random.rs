//! A strategy that randomly chooses a move, for use in tests.

use super::super::interface::*;
use super::util::*;
use rand::seq::SliceRandom;

pub struct Random<S: GameState> {
    rng: rand::rngs::ThreadRng,
    move_pool: MovePool<S::M>,
}

impl<S: GameState> Random<S> {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng(), move_pool: MovePool::default() }
    }
}

impl<S: GameState> Default for Random<S> {
    fn default() -> Self {
        Random::new()
    }
}

impl<S: GameState> Strategy<S> for Random<S> {
    fn choose_move(&mut self, s: &S) -> Option<S::M> {
        if s.is_terminal() {
            return None;
        }
        let mut moves = self.move_pool.alloc();
        s.generate_moves(&mut moves);
        let m = moves.choose(&mut self.rng).cloned();
        self.move_pool.free(moves);
        m
    }
}
