use std::str::FromStr;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

mod kruskal;
mod prim;
mod recur_backtrack;

use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtracking;

use crate::error::MazeError;
use crate::maze::{Cell, Coord, Grid, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carving moves between lattice cells: distance 2 in the four axis
/// directions, so the midpoint in between can represent the wall.
pub(super) const CARVE_DIRECTIONS: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Applies `delta` to `coord`, returning `None` when the result leaves the grid.
pub(super) fn offset(coord: Coord, delta: (i32, i32), grid: &Grid) -> Option<Coord> {
    let x = coord.0 as i32 + delta.0;
    let y = coord.1 as i32 + delta.1;
    if x < 0 || y < 0 || x >= grid.width() as i32 || y >= grid.height() as i32 {
        None
    } else {
        Some((x as u16, y as u16))
    }
}

/// Maze generation algorithm variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    RecursiveBacktracking,
    Prims,
    Kruskals,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecursiveBacktracking => write!(f, "Recursive Backtracking (DFS)"),
            Generator::Prims => write!(f, "Prim's Algorithm"),
            Generator::Kruskals => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive_backtracking" => Ok(Generator::RecursiveBacktracking),
            "prims" => Ok(Generator::Prims),
            "kruskals" => Ok(Generator::Kruskals),
            other => Err(MazeError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Generates a `width` x `height` maze with the given algorithm.
///
/// The start cell is always `(0, 0)`. Passing the same `seed` reproduces the
/// same maze byte for byte; `None` draws a fresh seed from the OS.
pub fn generate_maze(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Maze, MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidGrid(format!(
            "maze dimensions must be at least 1x1, got {width}x{height}"
        )));
    }

    let mut rng = get_rng(seed);
    let mut grid = Grid::new(width, height, Cell::Wall);
    match generator {
        Generator::RecursiveBacktracking => recursive_backtracking(&mut grid, &mut rng),
        Generator::Prims => randomized_prim(&mut grid, &mut rng),
        Generator::Kruskals => randomized_kruskal(&mut grid, &mut rng),
    }

    let start = (0, 0);
    let end = pick_end(&grid);
    tracing::debug!(
        "[generate] {}x{} maze via {:?}: start {:?}, end {:?}",
        width,
        height,
        generator,
        start,
        end
    );
    Ok(Maze::new(grid, start, end, generator))
}

/// Common post-step for all generators: the end cell is the bottom-right
/// corner if it was carved, otherwise the first carved cell found scanning
/// bottom row to top, rightmost column first within a row.
fn pick_end(grid: &Grid) -> Coord {
    let corner = (grid.width() - 1, grid.height() - 1);
    if grid[corner] == Cell::Path {
        return corner;
    }
    for y in (0..grid.height()).rev() {
        for x in (0..grid.width()).rev() {
            if grid[(x, y)] == Cell::Path {
                return (x, y);
            }
        }
    }
    // Every generator carves (0, 0) before this runs
    (0, 0)
}
