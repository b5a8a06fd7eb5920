//! Type definitions for maze cells, grid coordinates and movement directions.

use std::fmt;

/// Position of a single cell in the maze grid.
///
/// This structure holds a zero-based row and column pair. Two coordinates are equal when both
/// components match, and the type is [`Copy`] so callers always receive their own value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Zero-based row index, counted from the top of the grid.
    pub row: usize,
    /// Zero-based column index, counted from the left of the grid.
    pub col: usize,
}

impl Coordinate {
    /// Builds a coordinate from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring coordinate one step away in the given direction.
    ///
    /// This function returns `None` when the step would leave the non-negative quadrant. It does
    /// not know about grid dimensions, so the upper bounds are left to the grid itself.
    #[must_use]
    pub const fn shifted(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.offset();
        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta) else {
            return None;
        };

        Some(Self { row, col })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Kind of a single maze cell.
///
/// This enumeration is parsed once when the maze is loaded, so the rest of the crate never
/// compares raw characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable wall, written as `#`.
    Wall,
    /// Walkable floor, written as a space.
    Open,
    /// Unique entry point of the maze, written as `S`.
    Start,
    /// Unique exit point of the maze, written as `E`.
    End,
}

impl Cell {
    /// Parses a maze symbol into its cell kind, returning `None` for unknown symbols.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the symbol this cell kind is written as in a maze file.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }
}

/// Orthogonal movement direction on the grid.
///
/// The declaration order is the order in which the solver explores neighbours, and [`ALL`]
/// preserves it.
///
/// [`ALL`]: Direction::ALL
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One column to the right.
    Right,
    /// One row down.
    Down,
    /// One column to the left.
    Left,
    /// One row up.
    Up,
}

impl Direction {
    /// Every direction, in exploration order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Returns the `(row, column)` shift applied by a step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }
}
