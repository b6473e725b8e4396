//! Core Connect Four game logic: board representation and geometry, player
//! types, and the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Simulation, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
