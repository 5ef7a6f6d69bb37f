pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use error::{EngineError, Result};
pub use session_rng::{RandomSource, SessionRng};
