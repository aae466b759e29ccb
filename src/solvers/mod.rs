use std::collections::HashMap;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

mod astar;
mod bfs;
mod dfs;

use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;

use crate::error::MazeError;
use crate::maze::{Cell, Coord, Grid};

/// Pathfinding algorithm variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    Bfs,
    Dfs,
    #[serde(rename = "astar")]
    AStar,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "astar" => Ok(Solver::AStar),
            other => Err(MazeError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// One snapshot of search progress, recorded each time a node is expanded.
///
/// `visited` and `frontier` are full copies taken at that instant, so a
/// visualization can replay the search without re-running it. The order
/// inside `visited` is the set's natural order; `frontier` preserves the
/// pending queue/stack/heap order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub current: Coord,
    pub visited: Vec<Coord>,
    pub frontier: Vec<Coord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of distinct nodes discovered during the search.
    pub nodes_explored: usize,
    /// Number of cells on the returned path, both endpoints included.
    pub path_length: usize,
    /// Wall-clock duration of the solve in seconds, from a monotonic clock.
    pub execution_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Cells from start to end inclusive; empty when the end is unreachable.
    pub path: Vec<Coord>,
    pub steps: Vec<Step>,
    pub stats: SolveStats,
}

/// What a single search pass reports back to the dispatcher.
pub(super) struct SearchOutcome {
    pub(super) path: Vec<Coord>,
    pub(super) steps: Vec<Step>,
    pub(super) nodes_explored: usize,
}

/// Finds a path from `start` to `end` over the grid's path cells.
///
/// Fails fast with `InvalidCoordinate` when either endpoint is out of bounds
/// or sits on a wall. An unreachable end is not an error: the solution comes
/// back with an empty path and the exploration trace up to exhaustion.
pub fn solve_maze(
    grid: &Grid,
    start: Coord,
    end: Coord,
    solver: Solver,
) -> Result<Solution, MazeError> {
    for coord in [start, end] {
        if !grid.is_in_bounds(coord) || grid[coord] != Cell::Path {
            return Err(MazeError::InvalidCoordinate(coord));
        }
    }

    let started = Instant::now();
    let outcome = match solver {
        Solver::Bfs => solve_bfs(grid, start, end),
        Solver::Dfs => solve_dfs(grid, start, end),
        Solver::AStar => solve_astar(grid, start, end),
    };
    let execution_time = started.elapsed().as_secs_f64();
    tracing::debug!(
        "[solve] {:?} explored {} nodes in {:.6}s, path length {}",
        solver,
        outcome.nodes_explored,
        execution_time,
        outcome.path.len()
    );

    Ok(Solution {
        stats: SolveStats {
            nodes_explored: outcome.nodes_explored,
            path_length: outcome.path.len(),
            execution_time,
        },
        path: outcome.path,
        steps: outcome.steps,
    })
}

/// Get the neighbors of a cell that can be stepped to: in bounds and carved,
/// probed in the fixed order down, right, up, left.
pub(super) fn get_neighbors(grid: &Grid, coord: Coord) -> impl Iterator<Item = Coord> {
    let (x, y) = coord;
    // NOTE: This way of handling underflow/overflow is overflow-safe.
    // When x < 1 or y < 1, wrap x - 1 or y - 1 to u16::MAX to avoid underflow,
    // and automatically filter it out in the bounds check. When x + 1 or
    // y + 1 exceeds u16::MAX, saturate at u16::MAX, which the bounds check
    // also filters out (the largest cell index numerically possible is
    // u16::MAX - 1).
    [
        (x, y.saturating_add(1)),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x.wrapping_sub(1), y),
    ]
    .into_iter()
    .filter(move |&c| grid.is_in_bounds(c) && grid[c] == Cell::Path)
}

/// Walks the predecessor map back from `goal` to the start, then reverses.
pub(super) fn reconstruct_path(came_from: &HashMap<Coord, Coord>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}
