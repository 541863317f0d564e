//! Core Connect Four rules: board representation, player types, the game
//! state machine, and the engine that front ends drive.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, Position, COLS, ROWS, WIN_LENGTH};
pub use engine::GameEngine;
pub use player::Player;
pub use state::{DropOutcome, GameOutcome, GameState};
