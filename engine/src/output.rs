use common::tictactoe::MoveCandidate;

/// `"<score> <row> <col>"`. A positive score means the mover wins with best
/// play, a negative one that it loses, and zero a draw; the closer to 100 the
/// fewer plies until the result.
pub fn format_move(candidate: &MoveCandidate) -> String {
    format!("{} {}", candidate.score, candidate.position)
}
