//! Grid maze engine: maze generation over a rectangular cell grid and
//! pathfinding with step-by-step trace recording for visualization.
//!
//! The two halves are independent and stateless per call. [`generators`]
//! builds a [`maze::Maze`] from dimensions, an algorithm variant, and an
//! optional seed; [`solvers`] explores an existing grid and returns a
//! [`solvers::Solution`] with the path, the full exploration trace, and
//! timing statistics. Everything serializes losslessly with serde, so a maze
//! read back from storage solves identically to the one just generated.

pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::{Generator, generate_maze};
pub use maze::{Cell, Coord, Grid, Maze};
pub use solvers::{Solution, SolveStats, Solver, Step, solve_maze};
