//! Pathfinding algorithm module.
//!
//! This module contains the [`Solver`] abstraction and the depth-first backtracking search that
//! walks a [`Maze`] from its start cell to its end cell.

use log::{debug, trace};

use crate::{
    maze::Maze,
    types::{Coordinate, Direction},
    MazeError, Result,
};

/// Strategy for finding a path through a maze.
pub trait Solver {
    /// Searches a path from the start cell to the end cell of `maze`.
    ///
    /// The returned path lists every cell in traversal order, start first and end last, or is
    /// empty when the end cannot be reached. Solvers may use the visited flags of `maze` as
    /// scratch space.
    ///
    /// # Errors
    ///
    /// This function may return errors from the grid queries it performs.
    fn solve(&self, maze: &mut Maze) -> Result<Vec<Coordinate>>;
}

/// Depth-first backtracking solver.
///
/// This solver commits to a cell, tries its neighbours right, down, left and up in that order, and
/// drops the cell from the path again when none of them leads to the end. A cell that has been
/// entered once stays visited for the rest of the search, which bounds the work by the number of
/// cells. The first path found is returned, which is not necessarily the shortest one.
///
/// The search keeps its own stack of frames instead of recursing, so large mazes cannot overflow
/// the call stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

/// Cell on the current tentative path, with the neighbour to try next.
#[derive(Debug)]
struct Frame {
    /// Cell held on the path.
    at: Coordinate,
    /// Index into [`Direction::ALL`] of the next neighbour to explore.
    next: usize,
}

impl Solver for DepthFirstSolver {
    fn solve(&self, maze: &mut Maze) -> Result<Vec<Coordinate>> {
        maze.reset_visited();

        let start = maze.start_coordinate();
        let end = maze.end_coordinate();
        let mut stack = Vec::new();

        if is_feasible(maze, start)? {
            maze.set_visited(start.row, start.col, true)?;
            stack.push(Frame { at: start, next: 0 });
        }

        while let Some(frame) = stack.last_mut() {
            let current = frame.at;
            if current == end {
                let path: Vec<Coordinate> = stack.iter().map(|frame| frame.at).collect();
                debug!("found a path of {} cells", path.len());
                return Ok(path);
            }

            let Some(&direction) = Direction::ALL.get(frame.next) else {
                trace!("backtracking from {current}");
                let _ = stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(neighbour) = current.shifted(direction) else {
                continue;
            };
            if is_feasible(maze, neighbour)? {
                trace!("moving {direction:?} from {current} to {neighbour}");
                maze.set_visited(neighbour.row, neighbour.col, true)?;
                stack.push(Frame {
                    at: neighbour,
                    next: 0,
                });
            }
        }

        debug!("no path from {start} to {end}");
        Ok(Vec::new())
    }
}

/// Checks that a cell is inside the grid, not a wall and not yet visited.
fn is_feasible(maze: &Maze, at: Coordinate) -> Result<bool> {
    if !maze.is_within_bounds(at.row, at.col) {
        return Ok(false);
    }

    Ok(!maze.is_wall(at.row, at.col)? && !maze.has_been_visited(at.row, at.col)?)
}

/// Runs `solver` on a maze that may not have been loaded yet.
///
/// # Errors
///
/// Returns [`MazeError::NoMazeLoaded`] when `maze` is `None`, and otherwise any error from the
/// solver itself.
pub fn solve_loaded<Strategy>(
    solver: &Strategy,
    maze: Option<&mut Maze>,
) -> Result<Vec<Coordinate>>
where
    Strategy: Solver + ?Sized,
{
    solver.solve(maze.ok_or(MazeError::NoMazeLoaded)?)
}
