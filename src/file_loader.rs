//! File loading utilities for maze files.

use std::{fs, path::Path};

use log::debug;

use crate::{maze::Maze, MazeError, Result};

/// Reads a maze file from disk and parses it.
///
/// This function reads the whole file as text and hands it to [`Maze::create`], so the same blank
/// line handling and validation apply to files as to in-memory input.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be opened or read ([`MazeError::FileAccess`])
/// - The contents are not a valid maze (see [`Maze::create`])
pub fn load<Location: AsRef<Path>>(path: Location) -> Result<Maze> {
    let path = path.as_ref();
    debug!("reading maze from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| MazeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Maze::create(&contents)
}
