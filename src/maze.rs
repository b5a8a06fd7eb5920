//! Maze grid data and management module.
//!
//! This module contains the `Maze` struct, which parses the textual maze format into a grid of
//! cells, tracks the start and end points along with per-cell visited flags, and renders the grid
//! back to text with a solution path drawn onto it.

use std::{collections::HashSet, fmt};

use log::debug;

use crate::{
    types::{Cell, Coordinate},
    MazeError, Result,
};

/// Parsed maze grid.
///
/// This structure owns the rectangular cell grid and a parallel grid of visited flags. The cells
/// never change after [`Maze::create`]; only the visited flags are mutated, and only through
/// [`Maze::set_visited`] and [`Maze::reset_visited`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cells stored row by row.
    cells: Vec<Vec<Cell>>,
    /// Visited flags, with the same dimensions as [`cells`](Maze::cells).
    visited: Vec<Vec<bool>>,
    /// Number of rows.
    height: usize,
    /// Number of columns in every row.
    width: usize,
    /// Location of the `S` cell.
    start: Coordinate,
    /// Location of the `E` cell.
    end: Coordinate,
}

impl Maze {
    /// Builds a maze from its textual representation.
    ///
    /// Lines made only of whitespace are dropped before anything else, so the height is the
    /// number of remaining lines and the width is the length of the first one. Cells are scanned
    /// in row-major order and the first problem found is reported.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - No non-blank line is left ([`MazeError::EmptyInput`])
    /// - A row is not as wide as the first one ([`MazeError::RaggedRow`])
    /// - A cell holds an unknown symbol ([`MazeError::UnrecognizedCell`])
    /// - `S` or `E` appears twice ([`MazeError::DuplicateStart`], [`MazeError::DuplicateEnd`])
    /// - `S` or `E` is absent ([`MazeError::MissingStart`], [`MazeError::MissingEnd`]), start
    ///   being checked first
    pub fn create(raw: &str) -> Result<Self> {
        let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();
        let width = lines
            .first()
            .ok_or(MazeError::EmptyInput)?
            .chars()
            .count();

        let mut cells = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let mut parsed = Vec::with_capacity(width);
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(MazeError::UnrecognizedCell { row, col, symbol })?;
                match cell {
                    Cell::Start => record_marker(&mut start, row, col, MazeError::DuplicateStart)?,
                    Cell::End => record_marker(&mut end, row, col, MazeError::DuplicateEnd)?,
                    Cell::Wall | Cell::Open => {}
                }
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let end = end.ok_or(MazeError::MissingEnd)?;
        let height = cells.len();
        debug!("loaded {height}x{width} maze with start {start} and end {end}");

        Ok(Self {
            cells,
            visited: vec![vec![false; width]; height],
            height,
            width,
            start,
            end,
        })
    }

    /// Returns the number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the location of the `S` cell.
    #[must_use]
    pub const fn start_coordinate(&self) -> Coordinate {
        self.start
    }

    /// Returns the location of the `E` cell.
    #[must_use]
    pub const fn end_coordinate(&self) -> Coordinate {
        self.end
    }

    /// Checks whether a coordinate lies inside the grid. This never fails.
    #[must_use]
    pub const fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Returns the kind of the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate lies outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(MazeError::OutOfBounds { row, col })
    }

    /// Checks whether the cell at a coordinate is a wall.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate lies outside the grid.
    pub fn is_wall(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell(row, col)? == Cell::Wall)
    }

    /// Reads the visited flag at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate lies outside the grid.
    pub fn has_been_visited(&self, row: usize, col: usize) -> Result<bool> {
        self.visited
            .get(row)
            .and_then(|flags| flags.get(col))
            .copied()
            .ok_or(MazeError::OutOfBounds { row, col })
    }

    /// Writes the visited flag at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when the coordinate lies outside the grid.
    pub fn set_visited(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let flag = self
            .visited
            .get_mut(row)
            .and_then(|flags| flags.get_mut(col))
            .ok_or(MazeError::OutOfBounds { row, col })?;
        *flag = value;

        Ok(())
    }

    /// Clears every visited flag.
    pub fn reset_visited(&mut self) {
        for flags in &mut self.visited {
            flags.fill(false);
        }
    }

    /// Renders the grid as text with a path drawn onto it.
    ///
    /// This function produces one line per row, each terminated by a newline. Walls, the start and
    /// the end keep their symbols; open cells on `path` are replaced by `marker` and the remaining
    /// open cells stay blank.
    #[must_use]
    pub fn render(&self, path: &[Coordinate], marker: char) -> String {
        let on_path: HashSet<Coordinate> = path.iter().copied().collect();
        let mut output = String::with_capacity(self.height * (self.width + 1));

        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Open if on_path.contains(&Coordinate::new(row, col)) => marker,
                    Cell::Wall | Cell::Open | Cell::Start | Cell::End => cell.symbol(),
                };
                output.push(symbol);
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render(&[], Cell::Open.symbol()))
    }
}

/// Stores the location of a start or end marker, failing if one was already stored.
fn record_marker(
    slot: &mut Option<Coordinate>,
    row: usize,
    col: usize,
    duplicate: MazeError,
) -> Result<()> {
    if slot.replace(Coordinate::new(row, col)).is_some() {
        return Err(duplicate);
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::{fixtures::GOING_UP, *};

    fn sample() -> Maze {
        Maze::create(GOING_UP).expect("Sample maze should be valid")
    }

    #[test]
    fn test_create_valid_maze() {
        let maze = sample();

        assert_eq!(maze.height(), 7);
        assert_eq!(maze.width(), 7);
        assert_eq!(maze.start_coordinate(), Coordinate::new(5, 1));
        assert_eq!(maze.end_coordinate(), Coordinate::new(3, 3));
    }

    #[test]
    fn test_create_ignores_blank_lines() {
        let maze =
            Maze::create("\n   \n###\n\n#S#\n \t \n#E#\n\n").expect("Maze should be valid");

        assert_eq!(maze.height(), 3);
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.start_coordinate(), Coordinate::new(1, 1));
        assert_eq!(maze.end_coordinate(), Coordinate::new(2, 1));
    }

    #[test]
    fn test_create_accepts_crlf_line_endings() {
        let maze = Maze::create("#S#\r\n# #\r\n#E#\r\n").expect("Maze should be valid");

        assert_eq!(maze.width(), 3);
        assert_eq!(maze.end_coordinate(), Coordinate::new(2, 1));
    }

    #[test]
    fn test_create_empty_input() {
        assert!(matches!(Maze::create(""), Err(MazeError::EmptyInput)));
        assert!(matches!(
            Maze::create("\n  \n\t\n"),
            Err(MazeError::EmptyInput)
        ));
    }

    #[test]
    fn test_create_missing_start() {
        let result = Maze::create("#####\n#  E#\n#####");
        assert!(matches!(result, Err(MazeError::MissingStart)));
    }

    #[test]
    fn test_create_missing_end() {
        let result = Maze::create("#####\n#S  #\n#####");
        assert!(matches!(result, Err(MazeError::MissingEnd)));
    }

    #[test]
    fn test_create_missing_both_reports_start() {
        let result = Maze::create("#####\n#   #\n#####");
        assert!(matches!(result, Err(MazeError::MissingStart)));
    }

    #[test]
    fn test_create_duplicate_start() {
        let result = Maze::create("#####\n#S S#\n# E #\n#####");
        assert!(matches!(result, Err(MazeError::DuplicateStart)));
    }

    #[test]
    fn test_create_duplicate_end() {
        let result = Maze::create("#####\n#S E#\n# E #\n#####");
        assert!(matches!(result, Err(MazeError::DuplicateEnd)));
    }

    #[test]
    fn test_create_ragged_row() {
        let result = Maze::create("#####\n#S E#\n# #\n#####");
        assert!(matches!(
            result,
            Err(MazeError::RaggedRow {
                row: 2,
                expected: 5,
                found: 3
            })
        ));
    }

    #[test]
    fn test_create_unrecognized_symbol() {
        let result = Maze::create("#####\n#S.E#\n#####");
        assert!(matches!(
            result,
            Err(MazeError::UnrecognizedCell {
                row: 1,
                col: 2,
                symbol: '.'
            })
        ));
    }

    #[test]
    fn test_is_wall() {
        let maze = sample();

        assert!(maze.is_wall(3, 2).expect("Coordinate should be in bounds"));
        assert!(!maze.is_wall(5, 1).expect("Coordinate should be in bounds"));
        assert!(!maze.is_wall(1, 3).expect("Coordinate should be in bounds"));
    }

    #[test]
    fn test_is_wall_out_of_bounds() {
        let maze = sample();

        assert!(matches!(
            maze.is_wall(7, 8),
            Err(MazeError::OutOfBounds { row: 7, col: 8 })
        ));
        assert!(matches!(
            maze.is_wall(0, 7),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_is_within_bounds() {
        let maze = sample();

        assert!(maze.is_within_bounds(0, 0));
        assert!(maze.is_within_bounds(6, 6));
        assert!(!maze.is_within_bounds(6, 7));
        assert!(!maze.is_within_bounds(7, 6));
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let maze = sample();
        let snapshot = maze.clone();

        for _ in 0..3 {
            assert!(maze.is_within_bounds(3, 2));
            assert!(maze.is_wall(3, 2).expect("Coordinate should be in bounds"));
        }

        assert_eq!(maze, snapshot);
    }

    #[test]
    fn test_visited_flags() {
        let mut maze = sample();

        assert!(!maze
            .has_been_visited(3, 1)
            .expect("Coordinate should be in bounds"));
        maze.set_visited(3, 1, true)
            .expect("Coordinate should be in bounds");
        assert!(maze
            .has_been_visited(3, 1)
            .expect("Coordinate should be in bounds"));
        maze.set_visited(3, 1, false)
            .expect("Coordinate should be in bounds");
        assert!(!maze
            .has_been_visited(3, 1)
            .expect("Coordinate should be in bounds"));
    }

    #[test]
    fn test_visited_flags_out_of_bounds() {
        let mut maze = sample();

        assert!(matches!(
            maze.set_visited(10, 1, true),
            Err(MazeError::OutOfBounds { row: 10, col: 1 })
        ));
        assert!(matches!(
            maze.has_been_visited(10, 1),
            Err(MazeError::OutOfBounds { row: 10, col: 1 })
        ));
    }

    #[test]
    fn test_reset_visited() {
        let mut maze = sample();
        maze.set_visited(1, 1, true)
            .expect("Coordinate should be in bounds");
        maze.set_visited(5, 5, true)
            .expect("Coordinate should be in bounds");

        maze.reset_visited();

        assert_eq!(maze, sample());
    }

    #[test]
    fn test_render_marks_open_path_cells_only() {
        let maze = sample();
        let path = [
            Coordinate::new(5, 1),
            Coordinate::new(5, 2),
            Coordinate::new(4, 5),
            Coordinate::new(3, 2),
            Coordinate::new(3, 3),
        ];

        let rendered = maze.render(&path, '.');

        assert_eq!(
            rendered,
            "\
#######
#     #
# ### #
# #E  #
# ###.#
#S.   #
#######
"
        );
    }

    #[test]
    fn test_render_without_path_matches_display() {
        let maze = sample();

        assert_eq!(maze.render(&[], '.'), maze.to_string());
        assert_eq!(maze.to_string().lines().count(), 7);
        assert!(maze.to_string().lines().all(|line| line.len() == 7));
    }
}
