use rand::Rng;

use super::engine::{self, MoveOutcome};
use super::spawner::{Spawned, Spawner};
use super::{Board, Direction};
use crate::error::SpawnError;

/// The board together with the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
    score: u64,
}

impl GameState {
    /// Create initial game state: empty board, zero score
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            score: 0,
        }
    }

    /// Resume from an arbitrary board and score
    pub fn from_parts(board: Board, score: u64) -> Self {
        GameState { board, score }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Slide the board in `direction` and add the merge points to the score
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = engine::apply(&mut self.board, direction);
        self.score += outcome.score_delta;
        outcome
    }

    /// Place a new tile on the board
    pub fn spawn<R: Rng>(&mut self, spawner: &mut Spawner<R>) -> Result<Spawned, SpawnError> {
        spawner.spawn(&mut self.board)
    }
}
