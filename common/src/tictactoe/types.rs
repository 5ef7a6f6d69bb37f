use std::fmt;

use crate::error::{EngineError, Result};
use super::board::BOARD_SIZE;

/// One side of the game. The sign doubles as the value stored in a cell,
/// so a line summing to `3 * sign` is a win for that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn sign(self) -> i32 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }

    pub fn from_sign(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Player::X),
            1 => Ok(Player::O),
            _ => Err(EngineError::InvalidPlayer { value }),
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    Taken(Player),
}

impl Mark {
    pub fn value(self) -> i32 {
        match self {
            Mark::Empty => 0,
            Mark::Taken(player) => player.sign(),
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Mark::Empty),
            _ => Player::from_sign(value).ok().map(Mark::Taken),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::Taken(player) => player.symbol(),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Taken(player)
    }
}

/// A cell coordinate. Only constructible inside the board bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row-major cell index, 0..9.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub(super) fn new_unchecked(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}
