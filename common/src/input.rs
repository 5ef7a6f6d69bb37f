//! Turns the raw command-line integers into a root player and a move list.

use crate::error::{EngineError, Result};
use crate::tictactoe::{BOARD_SIZE, Board, Player, Position};

pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInput {
    pub player: Player,
    /// Row-major, which is not necessarily the order the moves were played in.
    pub moves: Vec<(Player, Position)>,
}

impl PositionInput {
    pub fn to_board(&self) -> Result<Board> {
        Board::replay(self.moves.iter().copied())
    }
}

pub fn parse_position(player: i32, cells: &[i32]) -> Result<PositionInput> {
    let player = Player::from_sign(player)?;
    if cells.len() != CELL_COUNT {
        return Err(EngineError::InvalidBoardLength {
            expected: CELL_COUNT,
            got: cells.len(),
        });
    }

    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (index, &value) in cells.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let owner = Player::from_sign(value)
            .map_err(|_| EngineError::InvalidCellValue { index, value })?;
        moves.push((owner, Position::from_index(index)?));
    }

    Ok(PositionInput { player, moves })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_collects_marks_row_major() {
        let input = parse_position(1, &[0, 0, 0, 0, -1, 0, 0, 0, 1]).unwrap();

        assert_eq!(input.player, Player::O);
        assert_eq!(
            input.moves,
            vec![
                (Player::X, Position::new(1, 1).unwrap()),
                (Player::O, Position::new(2, 2).unwrap()),
            ]
        );
    }

    #[test]
    fn test_parse_position_builds_board() {
        let input = parse_position(-1, &[-1, -1, 0, 1, 1, 0, 0, 0, 0]).unwrap();
        let board = input.to_board().unwrap();

        assert_eq!(board.row_sums(), [-2, 2, 0]);
        assert_eq!(board.turn(), 4);
    }

    #[test]
    fn test_parse_position_rejects_bad_player() {
        assert_eq!(
            parse_position(0, &[0; 9]),
            Err(EngineError::InvalidPlayer { value: 0 })
        );
    }

    #[test]
    fn test_parse_position_rejects_bad_cell() {
        assert_eq!(
            parse_position(1, &[0, 0, 0, 2, 0, 0, 0, 0, 0]),
            Err(EngineError::InvalidCellValue { index: 3, value: 2 })
        );
    }

    #[test]
    fn test_parse_position_requires_nine_cells() {
        assert_eq!(
            parse_position(1, &[0, 0, 0]),
            Err(EngineError::InvalidBoardLength { expected: 9, got: 3 })
        );
        assert!(parse_position(1, &[0; 10]).is_err());
    }
}
