//! Application entry logic for the maze solver.
//!
//! This module holds the command-line interface, logging setup, and the pipeline that loads a
//! maze, solves it and prints the result.

use std::{io::Write, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Env};
use log::info;

use crate::{
    file_loader,
    pathfinding::{DepthFirstSolver, Solver as _},
};

/// Line printed before the rendered maze.
pub const BANNER: &str = "=== Maze solution (if any) below ===";

/// Symbol drawn on open cells that belong to the solution path.
pub const PATH_MARKER: char = '.';

/// Maze file solved when no path is given on the command line.
const DEFAULT_MAZE: &str = "mazes/sample.maze";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the maze file to solve.
    #[arg(value_name = "MAZE", default_value = DEFAULT_MAZE)]
    pub maze: PathBuf,
}

/// Maze solving application.
///
/// This structure holds what a single run needs: the maze file to read and the marker used to draw
/// the solution.
#[derive(Debug)]
pub struct App {
    /// Maze file to load.
    maze_path: PathBuf,
    /// Symbol drawn on the solution path.
    marker: char,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_MAZE)
    }
}

impl From<Cli> for App {
    fn from(cli: Cli) -> Self {
        Self::new(cli.maze)
    }
}

impl App {
    /// Creates an application that solves the maze stored at `maze_path`.
    pub fn new<Location: Into<PathBuf>>(maze_path: Location) -> Self {
        Self {
            maze_path: maze_path.into(),
            marker: PATH_MARKER,
        }
    }

    /// Loads, solves and prints the maze.
    ///
    /// This function writes the banner, then the maze with the solution path drawn onto it, then a
    /// blank line. A maze without a solution is printed without any path markers.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The maze file cannot be read or parsed
    /// - Writing to `out` fails
    pub fn run<Sink: Write>(&self, out: &mut Sink) -> Result<()> {
        let mut maze = file_loader::load(&self.maze_path)
            .wrap_err_with(|| format!("failed to load maze {}", self.maze_path.display()))?;
        let path = DepthFirstSolver
            .solve(&mut maze)
            .wrap_err("failed to solve maze")?;
        info!("solution path holds {} cells", path.len());

        writeln!(out, "{BANNER}")?;
        writeln!(out, "{}", maze.render(&path, self.marker))?;

        Ok(())
    }
}

/// Installs the global logger.
///
/// The filter is read from `RUST_LOG` and falls back to `warn`.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
pub fn init_logging() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).try_init()?;

    Ok(())
}
