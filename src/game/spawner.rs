use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Tile};
use crate::error::SpawnError;

/// Default inverse probability of spawning a 4 instead of a 2.
pub const DEFAULT_FOUR_CHANCE_DIVIDER: u32 = 8;

/// Where a new tile landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub tile: Tile,
}

/// Places new tiles on uniformly random empty cells.
///
/// A spawned tile is a 4 with probability `1 / four_chance_divider`, a 2
/// otherwise.
pub struct Spawner<R: Rng = StdRng> {
    rng: R,
    four_chance_divider: u32,
}

impl Spawner<StdRng> {
    /// Spawner seeded from the operating system
    pub fn from_os_rng(four_chance_divider: u32) -> Self {
        Spawner::with_rng(StdRng::from_os_rng(), four_chance_divider)
    }

    /// Deterministic spawner for reproducible games
    pub fn seeded(seed: u64, four_chance_divider: u32) -> Self {
        Spawner::with_rng(StdRng::seed_from_u64(seed), four_chance_divider)
    }
}

impl<R: Rng> Spawner<R> {
    pub fn with_rng(rng: R, four_chance_divider: u32) -> Self {
        Spawner {
            rng,
            four_chance_divider: four_chance_divider.max(1),
        }
    }

    pub fn four_chance_divider(&self) -> u32 {
        self.four_chance_divider
    }

    /// Put a 2 or a 4 on a random empty cell of `board`.
    pub fn spawn(&mut self, board: &mut Board) -> Result<Spawned, SpawnError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(SpawnError::BoardFull);
        }

        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        let tile = if self.rng.random_range(0..self.four_chance_divider) == 0 {
            Tile::FOUR
        } else {
            Tile::TWO
        };
        board.set(row, col, Some(tile));

        Ok(Spawned { row, col, tile })
    }
}
