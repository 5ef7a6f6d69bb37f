mod board;
mod bot_controller;
mod search;
mod types;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{MoveCandidate, compute_best_move, line_bonus};
pub use search::{WIN_SCORE, score};
pub use types::{Mark, Player, Position};
