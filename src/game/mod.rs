//! Core Drop Token game logic: square board, player types, and the game
//! engine that validates placements and detects full-line wins and draws.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DropError, Line, MAX_SIZE};
pub use engine::{GameEngine, GameStatus, MoveError, PutOutcome};
pub use player::Player;
