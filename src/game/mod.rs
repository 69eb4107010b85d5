//! Core 2048 logic: tiles, the board, the move engine, tile spawning and the
//! game state that ties them together.

pub mod board;
mod direction;
pub mod engine;
pub mod spawner;
mod state;
mod tile;

pub use board::{Board, SIZE};
pub use direction::Direction;
pub use engine::MoveOutcome;
pub use spawner::{Spawned, Spawner, DEFAULT_FOUR_CHANCE_DIVIDER};
pub use state::GameState;
pub use tile::Tile;
