use std::fmt;

use super::Tile;
use crate::error::TileError;

/// Side length of the square board.
pub const SIZE: usize = 4;

/// Width of one cell in the text grid
pub const CELL_WIDTH: usize = 4;

/// A cell right-aligned in a `CELL_WIDTH` field, blank when empty
pub fn cell_text(cell: Option<Tile>) -> String {
    match cell {
        Some(tile) => format!("{:>width$}", tile.value(), width = CELL_WIDTH),
        None => " ".repeat(CELL_WIDTH),
    }
}

/// The dashed rule drawn between rows
pub fn row_rule() -> String {
    let mut rule = "-".repeat((CELL_WIDTH + 1) * (SIZE - 1));
    rule.push_str(&"-".repeat(CELL_WIDTH));
    rule
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Tile>; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Build a board from raw values, 0 meaning empty.
    /// Row 0 is the top, column 0 is the left.
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Result<Self, TileError> {
        let mut board = Board::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.cells[row][col] = Some(Tile::new(value)?);
                }
            }
        }
        Ok(board)
    }

    /// Raw values, 0 for empty cells
    pub fn to_values(&self) -> [[u32; SIZE]; SIZE] {
        self.cells
            .map(|line| line.map(|cell| cell.map_or(0, Tile::value)))
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, tile: Option<Tile>) {
        self.cells[row][col] = tile;
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col].is_none())
            .collect()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn highest_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().flatten().copied().max()
    }
}

/// Uncoloured grid: cells joined by `|`, rows split by a dashed rule.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            let cells: Vec<String> = line.iter().map(|&cell| cell_text(cell)).collect();
            writeln!(f, "{}", cells.join("|"))?;
            if row != SIZE - 1 {
                writeln!(f, "{}", row_rule())?;
            }
        }
        Ok(())
    }
}
