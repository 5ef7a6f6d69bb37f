use crate::error::{EngineError, Result};
use crate::log;
use crate::session_rng::RandomSource;
use super::board::Board;
use super::search::score;
use super::types::{Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub position: Position,
    pub score: i32,
}

impl MoveCandidate {
    pub fn new(position: Position, score: i32) -> Self {
        Self { position, score }
    }
}

/// Picks the best move for `player`.
///
/// Candidates are narrowed in three passes: the minimax optimum, then the
/// highest score plus `line_bonus` after the move, then a uniform pick by
/// `rng`. The returned score is the plain minimax value.
pub fn compute_best_move<R>(player: Player, board: &Board, rng: &mut R) -> Result<MoveCandidate>
where
    R: RandomSource + ?Sized,
{
    let available = board.empty_cells();
    if available.is_empty() {
        return Err(EngineError::NoMovesAvailable);
    }

    let scored = score_moves(player, board, &available)?;
    let optimal = retain_best(scored, |candidate| candidate.score);
    log!("{} of {} moves share the best score {}", optimal.len(), available.len(), optimal[0].score);

    let bonus_ranked = rank_by_line_bonus(player, board, &optimal)?;
    let best = retain_best(bonus_ranked, |&(_, adjusted)| adjusted);
    let finalists: Vec<MoveCandidate> = best.into_iter().map(|(candidate, _)| candidate).collect();

    let chosen = match finalists.as_slice() {
        [only] => *only,
        _ => {
            let index = rng.pick_index(finalists.len());
            log!("Breaking a {}-way tie at random, picked index {}", finalists.len(), index);
            finalists[index]
        }
    };

    log!("Best move for {} is ({}) with score {}", player, chosen.position, chosen.score);
    Ok(chosen)
}

/// Sum of the positive row, column and diagonal totals.
///
/// Only positive totals count whichever side is moving, so the bonus rewards
/// o's partial lines and never x's.
pub fn line_bonus(board: &Board) -> i32 {
    board.line_sums().filter(|&sum| sum > 0).sum()
}

fn score_moves(player: Player, board: &Board, available: &[Position]) -> Result<Vec<MoveCandidate>> {
    available
        .iter()
        .map(|&position| {
            let value = score(player, player, position, board, 0)?;
            Ok(MoveCandidate::new(position, value))
        })
        .collect()
}

fn rank_by_line_bonus(
    player: Player,
    board: &Board,
    candidates: &[MoveCandidate],
) -> Result<Vec<(MoveCandidate, i32)>> {
    candidates
        .iter()
        .map(|&candidate| {
            let mut after = board.clone();
            after.place(player, candidate.position)?;
            Ok((candidate, candidate.score + line_bonus(&after)))
        })
        .collect()
}

fn retain_best<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> i32,
{
    let Some(best) = items.iter().map(&key).max() else {
        return items;
    };
    items.into_iter().filter(|item| key(item) == best).collect()
}
