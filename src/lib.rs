//! This crate contains the library behind the mazerunner maze solver.
//!
//! A maze is loaded from text into a [`Maze`], solved with a [`Solver`] such as
//! [`DepthFirstSolver`], and rendered back to text with the discovered path marked on it.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod file_loader;
mod maze;
mod pathfinding;
mod types;

use std::{io, path::PathBuf};

use thiserror::Error;

pub use app::{init_logging, App, Cli, BANNER, PATH_MARKER};
pub use file_loader::load;
pub use maze::Maze;
pub use pathfinding::{solve_loaded, DepthFirstSolver, Solver};
pub use types::{Cell, Coordinate, Direction};

/// Failures raised while loading, querying or solving a maze.
///
/// Every error is fatal to the operation that produced it. The library never prints or logs
/// these; turning them into a diagnostic is left to the caller.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file could not be located or opened.
    #[error("Invalid file name/location: {}", .path.display())]
    FileAccess {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The input holds no lines once blank lines are discarded.
    #[error("Maze input file is empty.")]
    EmptyInput,
    /// No `S` cell was found.
    #[error("Maze does not contain starting point (S)")]
    MissingStart,
    /// No `E` cell was found.
    #[error("Maze does not contain end point (E)")]
    MissingEnd,
    /// More than one `S` cell was found.
    #[error("Maze contains more than one starting point (S)")]
    DuplicateStart,
    /// More than one `E` cell was found.
    #[error("Maze contains more than one end point (E)")]
    DuplicateEnd,
    /// A row does not have the width of the first row.
    #[error("Maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row, after blank lines are discarded.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A cell holds a symbol other than `#`, ` `, `S` or `E`.
    #[error("Maze contains unrecognized symbol {symbol:?} at ({row}, {col})")]
    UnrecognizedCell {
        /// Zero-based row of the cell.
        row: usize,
        /// Zero-based column of the cell.
        col: usize,
        /// Symbol found in the cell.
        symbol: char,
    },
    /// A coordinate query or mutation fell outside the grid.
    #[error("Invalid coordinates supplied. They must be within Maze boundaries.")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The solver was invoked without a maze.
    #[error("You must load the maze first.")]
    NoMazeLoaded,
}

/// Result type used throughout the library.
pub type Result<T, E = MazeError> = std::result::Result<T, E>;
