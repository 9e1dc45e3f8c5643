// Explicit game trees for testing strategies, with a record of which nodes a
// search entered.
#![allow(dead_code)]

use game_solver::{GameState, Player, Value};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum Tree {
    Leaf(Value),
    Node(Player, Vec<Tree>),
}

pub fn leaf(value: Value) -> Tree {
    Tree::Leaf(value)
}

pub fn max(children: Vec<Tree>) -> Tree {
    Tree::Node(Player::Maximizer, children)
}

pub fn min(children: Vec<Tree>) -> Tree {
    Tree::Node(Player::Minimizer, children)
}

impl Tree {
    pub fn child(&self, i: usize) -> &Tree {
        match self {
            Tree::Node(_, children) => &children[i],
            Tree::Leaf(_) => panic!("leaves have no children"),
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node(_, children) => children.as_slice(),
            Tree::Leaf(_) => &[],
        }
    }
}

/// Plain minimax without any pruning.
pub fn minimax(tree: &Tree) -> Value {
    match tree {
        Tree::Leaf(value) => *value,
        Tree::Node(player, children) => {
            let mut best = player.worst_value();
            for child in children {
                let value = minimax(child);
                if player.prefers(value, best) {
                    best = value;
                }
            }
            best
        }
    }
}

/// A tree where players alternate turns, every node up to `depth` has between
/// 1 and `max_branching` children, and leaves may appear early.
///
/// Leaf values are small integers so that ties are common.
pub fn random_tree<R: Rng>(rng: &mut R, player: Player, depth: usize, max_branching: usize) -> Tree {
    if depth == 0 || rng.gen_ratio(1, 8) {
        return leaf(rng.gen_range(-4..=4) as Value);
    }
    let n = rng.gen_range(1..=max_branching);
    let children =
        (0..n).map(|_| random_tree(rng, player.opponent(), depth - 1, max_branching)).collect();
    Tree::Node(player, children)
}

/// A position in a shared tree. Clones share the visit log.
#[derive(Clone)]
pub struct TreeState {
    root: Rc<Tree>,
    path: Vec<usize>,
    visits: Rc<RefCell<Vec<Vec<usize>>>>,
}

impl TreeState {
    pub fn new(tree: Tree) -> Self {
        TreeState { root: Rc::new(tree), path: Vec::new(), visits: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn node(&self) -> &Tree {
        self.path.iter().fold(&*self.root, |node, &i| node.child(i))
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Paths of every node a move has been applied into, in order.
    pub fn visits(&self) -> Vec<Vec<usize>> {
        self.visits.borrow().clone()
    }

    pub fn was_visited(&self, path: &[usize]) -> bool {
        self.visits.borrow().iter().any(|p| p == path)
    }

    pub fn clear_visits(&self) {
        self.visits.borrow_mut().clear();
    }
}

impl GameState for TreeState {
    type M = usize;

    fn is_terminal(&self) -> bool {
        matches!(self.node(), Tree::Leaf(_))
    }

    fn terminal_value(&self) -> Value {
        match self.node() {
            Tree::Leaf(value) => *value,
            Tree::Node(..) => panic!("terminal_value at {:?}, which isn't a leaf", self.path),
        }
    }

    fn player_to_move(&self) -> Player {
        match self.node() {
            Tree::Node(player, _) => *player,
            Tree::Leaf(_) => panic!("player_to_move at leaf {:?}", self.path),
        }
    }

    fn generate_moves(&self, moves: &mut Vec<usize>) {
        moves.extend(0..self.node().children().len());
    }

    fn apply_move(&mut self, m: &usize) {
        assert!(*m < self.node().children().len(), "illegal move {} at {:?}", m, self.path);
        self.path.push(*m);
        self.visits.borrow_mut().push(self.path.clone());
    }
}
