//! A definition of the game Tic-Tac-Toe using the library, for use in tests.
//!
//! For example, playing the solver against itself should always result in a
//! draw; and playing it against a strategy that picks moves randomly should
//! always result in a win or draw for the solver.
#![allow(dead_code)]

use game_solver::{GameState, Player, Value};
use std::default::Default;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Square {
    fn invert(&self) -> Self {
        match *self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }
}

impl Default for Square {
    fn default() -> Square {
        Square::Empty
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

const LINES: [[usize; 3]; 8] =
    [[0, 1, 2], [3, 4, 5], [6, 7, 8], [0, 3, 6], [1, 4, 7], [2, 5, 8], [0, 4, 8], [2, 4, 6]];

/// X moves first and maximizes; O minimizes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Square; 9],
    to_move: Square,
}

impl Board {
    /// Build a board from a row-major string of `X`, `O` and `.`.
    /// The player to move is inferred from the piece counts.
    pub fn parse(s: &str) -> Board {
        let mut b = Board::default();
        let mut xs = 0;
        let mut os = 0;
        for (i, c) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            b.squares[i] = match c {
                'X' => {
                    xs += 1;
                    Square::X
                }
                'O' => {
                    os += 1;
                    Square::O
                }
                _ => Square::Empty,
            };
        }
        b.to_move = if xs > os { Square::O } else { Square::X };
        b
    }

    pub fn square(&self, i: usize) -> Square {
        self.squares[i]
    }

    fn just_moved(&self) -> Square {
        self.to_move.invert()
    }

    fn winner(&self) -> Option<Square> {
        // A player can only cause themselves to win on their turn, so only check for that.
        let p = self.just_moved();
        if LINES.iter().any(|line| line.iter().all(|&i| self.squares[i] == p)) {
            Some(p)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Square::X }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

impl GameState for Board {
    type M = Place;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.squares.iter().all(|s| *s != Square::Empty)
    }

    fn terminal_value(&self) -> Value {
        match self.winner() {
            Some(Square::X) => 1.0,
            Some(Square::O) => -1.0,
            _ => 0.0,
        }
    }

    fn player_to_move(&self) -> Player {
        if self.to_move == Square::X {
            Player::Maximizer
        } else {
            Player::Minimizer
        }
    }

    fn generate_moves(&self, ms: &mut Vec<Place>) {
        for i in 0..self.squares.len() {
            if self.squares[i] == Square::Empty {
                ms.push(Place { i: i as u8 });
            }
        }
    }

    fn apply_move(&mut self, m: &Place) {
        self.squares[m.i as usize] = self.to_move;
        self.to_move = self.to_move.invert();
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Place {
    pub i: u8,
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

fn main() {
    use game_solver::{AlphaBeta, Strategy};

    let mut b = Board::default();
    let mut strategies = vec![AlphaBeta::<Board>::new(), AlphaBeta::<Board>::new()];
    let mut s = 0;
    while !b.is_terminal() {
        println!("{}", b);
        let ref mut strategy = strategies[s];
        match strategy.choose_move(&b) {
            Some(m) => {
                println!("{} plays {}", b.to_move, m);
                println!("{}\n", strategy.stats());
                b.apply_move(&m)
            }
            None => break,
        };
        s = 1 - s;
    }
    println!("{}", b);
}
