use crate::error::TileError;

/// A single tile value. Always a power of two, never below 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    pub const TWO: Tile = Tile(2);
    pub const FOUR: Tile = Tile(4);

    /// Validate a raw value as a tile
    pub fn new(value: u32) -> Result<Tile, TileError> {
        if value >= 2 && value.is_power_of_two() {
            Ok(Tile(value))
        } else {
            Err(TileError::NotPowerOfTwo(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// log2 of the value (2 -> 1, 4 -> 2, ...)
    pub fn exponent(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// The tile produced by merging two copies of this one, if it fits
    pub fn doubled(self) -> Option<Tile> {
        self.0.checked_mul(2).map(Tile)
    }
}
