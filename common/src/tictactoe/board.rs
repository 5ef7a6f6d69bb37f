use std::fmt;

use crate::error::{EngineError, Result};
use super::types::{Mark, Player, Position};

pub const BOARD_SIZE: usize = 3;

const MAIN_DIAGONAL: usize = 0;
const ANTI_DIAGONAL: usize = 1;

/// 3x3 grid with running line sums.
///
/// Every row, column and diagonal sum always equals the sum of the cell
/// values on that line, so a win is detected by comparing a sum against
/// `3 * player.sign()` instead of rescanning the cells. Cells are never
/// cleared; the search clones the board for each branch instead of undoing
/// moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    row_sums: [i32; BOARD_SIZE],
    column_sums: [i32; BOARD_SIZE],
    diagonal_sums: [i32; 2],
    turn: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `moves` in order onto an empty board.
    pub fn replay<I>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Player, Position)>,
    {
        let mut board = Self::new();
        for (player, position) in moves {
            board.place(player, position)?;
        }
        Ok(board)
    }

    pub fn place(&mut self, player: Player, position: Position) -> Result<()> {
        let (row, col) = (position.row(), position.col());
        if !self.cells[row][col].is_empty() {
            return Err(EngineError::IllegalMove { row, col });
        }

        let value = player.sign();
        self.cells[row][col] = Mark::from(player);
        self.turn += 1;
        self.row_sums[row] += value;
        self.column_sums[col] += value;
        if position.on_main_diagonal() {
            self.diagonal_sums[MAIN_DIAGONAL] += value;
        }
        if position.on_anti_diagonal() {
            self.diagonal_sums[ANTI_DIAGONAL] += value;
        }
        Ok(())
    }

    /// 100 when `player` has three in a row, 0 otherwise. A loss for
    /// `player` is not reported here.
    pub fn assess(&self, player: Player) -> i32 {
        let target = 3 * player.sign();
        if self.line_sums().any(|sum| sum == target) {
            super::search::WIN_SCORE
        } else {
            0
        }
    }

    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.assess(player) != 0)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_empty() {
                    cells.push(Position::new_unchecked(row, col));
                }
            }
        }
        cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row()][position.col()]
    }

    pub fn row_sums(&self) -> [i32; BOARD_SIZE] {
        self.row_sums
    }

    pub fn column_sums(&self) -> [i32; BOARD_SIZE] {
        self.column_sums
    }

    /// Main diagonal first, then the anti-diagonal.
    pub fn diagonal_sums(&self) -> [i32; 2] {
        self.diagonal_sums
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn line_sums(&self) -> impl Iterator<Item = i32> + '_ {
        self.row_sums
            .iter()
            .chain(self.column_sums.iter())
            .chain(self.diagonal_sums.iter())
            .copied()
    }

    /// Same position with x and o swapped.
    #[cfg(test)]
    pub(crate) fn with_players_swapped(&self) -> Self {
        let mut swapped = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Mark::Taken(player) = self.cells[row][col] {
                    swapped
                        .place(player.opponent(), Position::new_unchecked(row, col))
                        .unwrap();
                }
            }
        }
        swapped
    }

    #[cfg(test)]
    pub(crate) fn from_values(values: [i32; BOARD_SIZE * BOARD_SIZE]) -> Self {
        let moves = values.iter().enumerate().filter_map(|(index, &value)| {
            let player = Player::from_sign(value).ok()?;
            Some((player, Position::from_index(index).unwrap()))
        });
        Self::replay(moves).unwrap()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
