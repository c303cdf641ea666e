//! This crate solves text mazes: it finds a shortest path from the opening in
//! the top row to the opening in the bottom row.
//!
//! Solving happens in two stages. [`label`] runs a breadth-first search from
//! the start and records, for every reachable open cell, how many steps away
//! it is. [`reconstruct`] then walks back from the end, always moving to a
//! neighbour one step closer to the start, and returns the [`Path`].
//! [`Solver`] ties parsing, labelling and reconstruction together, and
//! [`Replay`] plays a path back one cell at a time.
//!
//! # Example
//! ```
//! use mazer::{Solver, SolverConfig};
//!
//! let solver = Solver::new(SolverConfig::default());
//! let maze = solver.parse("** **\n*   *\n*** *\n").unwrap();
//! let solution = solver.solve(&maze).unwrap();
//! assert_eq!(solution.render(&maze, '.'), "**.**\n* ..*\n***.*");
//! ```

/// Debug helpers for saving solved mazes and replays as images.
///
/// # Example
/// ```no_run
/// use mazer::{debug::save_solution_image, drawing::MazeDrawingConfig, Solver};
///
/// let solver = Solver::default();
/// let maze = solver.parse(&std::fs::read_to_string("mazes/maze.txt").unwrap()).unwrap();
/// let solution = solver.solve(&maze).unwrap();
/// save_solution_image(&maze, &solution.path, "solved.png", &MazeDrawingConfig::default()).unwrap();
/// ```
#[cfg(feature = "drawing")]
pub mod debug;
/// Drawing of mazes, paths and replay steps onto RGBA images.
#[cfg(feature = "drawing")]
pub mod drawing;
pub mod replay;

mod config;
mod grid;
mod grid_like;
mod label;
mod maze;
mod reconstruct;
mod solver;

use thiserror::Error;

pub use config::SolverConfig;
pub use grid::{Direction, Grid, NeighborOrder, Neighbors, Point, Tile};
pub use grid_like::GridLike;
pub use label::{label, DistanceGrid, UNREACHED};
pub use maze::{Maze, SymbolMode, Symbols};
pub use reconstruct::{reconstruct, Path};
pub use replay::{Replay, ReplayState, Step};
pub use solver::{Solution, Solver};

/// Reasons a maze or a grid cannot be used as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("first row has a single symbol, cannot tell walls from open cells")]
    NoOpenSymbol,

    #[error("row {row} has no open cell")]
    MissingOpening { row: usize },

    #[error("{point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("{point} is a wall")]
    WallCell { point: Point },

    #[error("distance grid is {}x{}, maze is {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("invalid neighbour order {0:?}, expected four distinct letters from l, r, u, d")]
    InvalidOrder(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Target {point} cannot be reached from the start")]
    UnreachableTarget { point: Point },

    #[error("Inconsistent distance grid: no neighbour of {point} at distance {expected}")]
    InternalInconsistency { point: Point, expected: u32 },

    #[error("Failed to render image: {0}")]
    ImageError(String),
}
