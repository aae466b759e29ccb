use rand::{Rng, rngs::StdRng};

use super::{CARVE_DIRECTIONS, offset};
use crate::maze::{Cell, Grid};

/// Recursive backtracking (DFS carve) with an explicit stack.
///
/// Produces a perfect maze: exactly one path between any two carved lattice
/// cells.
pub(super) fn recursive_backtracking(grid: &mut Grid, rng: &mut StdRng) {
    let start = (0, 0);
    grid[start] = Cell::Path;

    // The stack holds carved lattice cells only; a lattice cell is carved
    // iff it has been visited, so the grid doubles as the visited set.
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = CARVE_DIRECTIONS
            .iter()
            .filter_map(|&delta| offset(cell, delta, grid).map(|next| (next, delta)))
            .filter(|&(next, _)| grid[next] == Cell::Wall)
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let (neighbor, (dx, dy)) = neighbors[rng.random_range(0..neighbors.len())];

            // Carve the midpoint between the two lattice cells, then the cell itself
            let wall = (
                (cell.0 as i32 + dx / 2) as u16,
                (cell.1 as i32 + dy / 2) as u16,
            );
            grid[wall] = Cell::Path;
            grid[neighbor] = Cell::Path;

            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor on top to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
}
