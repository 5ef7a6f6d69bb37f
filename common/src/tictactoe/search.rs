use crate::error::Result;
use super::board::Board;
use super::types::{Player, Position};

pub const WIN_SCORE: i32 = 100;

/// Exhaustive minimax value of `current` playing at `position` on `board`,
/// seen from `root`.
///
/// Wins are worth `WIN_SCORE - depth` to the root player and losses
/// `-WIN_SCORE + depth`, so faster wins and slower losses score higher.
/// After a root move the opponent replies, so the children are minimised;
/// after an opponent move they are maximised.
pub fn score(
    root: Player,
    current: Player,
    position: Position,
    board: &Board,
    depth: i32,
) -> Result<i32> {
    let mut board = board.clone();
    board.place(current, position)?;

    let outcome = board.assess(current);
    if outcome != 0 {
        return Ok(if current == root {
            outcome - depth
        } else {
            -outcome + depth
        });
    }

    let available = board.empty_cells();
    if available.is_empty() {
        return Ok(0);
    }

    let next = current.opponent();
    let mut scores = Vec::with_capacity(available.len());
    for child in available {
        scores.push(score(root, next, child, &board, depth + 1)?);
    }

    let aggregate = if current == root {
        scores.into_iter().min()
    } else {
        scores.into_iter().max()
    };
    Ok(aggregate.unwrap_or(0))
}
