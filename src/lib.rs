//! # tui_2048
//!
//! The 2048 sliding-tile puzzle for the terminal. Tiles slide toward one edge
//! of a 4x4 board, equal neighbours merge into their sum, and a new 2 or 4
//! appears every turn.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: tiles, board, move engine, spawner, state
//! - [`ui`]: Full-screen (Ratatui) and line-mode front ends, input mapping, turn loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! ```
//! use tui_2048::game::{Board, Direction, GameState};
//!
//! let board = Board::from_values([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut state = GameState::from_parts(board, 0);
//! state.apply_move(Direction::Left);
//! assert_eq!(state.board().to_values()[0], [4, 8, 0, 0]);
//! assert_eq!(state.score(), 12);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
