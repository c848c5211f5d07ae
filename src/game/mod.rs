//! Core Connect Four rules: board representation, player types, and the game
//! state with move validation and win/tie detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveResult};
