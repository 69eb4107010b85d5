use super::board::SIZE;

/// The edge of the board that tiles slide toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a position along a line to board coordinates `(row, col)`.
    ///
    /// Lines are columns for vertical moves and rows for horizontal moves.
    /// Offset 0 is the cell on the edge the tiles move toward, offset
    /// `SIZE - 1` the cell on the opposite edge.
    pub fn coordinate(self, line: usize, offset: usize) -> (usize, usize) {
        debug_assert!(line < SIZE && offset < SIZE);
        match self {
            Direction::Up => (offset, line),
            Direction::Down => (SIZE - 1 - offset, line),
            Direction::Left => (line, offset),
            Direction::Right => (line, SIZE - 1 - offset),
        }
    }

    /// Get direction name for display
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}
