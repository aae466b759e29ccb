use std::collections::{HashMap, HashSet};

use super::{SearchOutcome, Step, get_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid};

/// Depth-first search. Finds a path iff one exists, with no shortest-path
/// guarantee; the visited-on-push discipline guarantees termination.
pub(super) fn solve_dfs(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
    let mut stack = vec![start];
    let mut visited: HashSet<Coord> = HashSet::from([start]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut steps = Vec::new();

    while let Some(current) = stack.pop() {
        steps.push(Step {
            current,
            visited: visited.iter().copied().collect(),
            // Bottom of the stack first, next node to expand last
            frontier: stack.clone(),
        });

        if current == goal {
            return SearchOutcome {
                path: reconstruct_path(&came_from, current),
                nodes_explored: visited.len(),
                steps,
            };
        }

        for neighbor in get_neighbors(grid, current) {
            if visited.insert(neighbor) {
                came_from.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    SearchOutcome {
        path: Vec::new(),
        nodes_explored: visited.len(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn test_dfs_expands_last_discovered_first() {
        let grid = Grid::new(3, 1, Cell::Path);
        let outcome = solve_dfs(&grid, (0, 0), (2, 0));
        // A corridor leaves no branching: expansion order is the corridor
        let expanded: Vec<Coord> = outcome.steps.iter().map(|s| s.current).collect();
        assert_eq!(expanded, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(outcome.path, vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_dfs_path_follows_predecessors() {
        let grid = Grid::new(3, 3, Cell::Path);
        let outcome = solve_dfs(&grid, (0, 0), (2, 2));
        assert_eq!(outcome.path.first(), Some(&(0, 0)));
        assert_eq!(outcome.path.last(), Some(&(2, 2)));
        // Simple path: no cell repeats
        let unique: HashSet<&Coord> = outcome.path.iter().collect();
        assert_eq!(unique.len(), outcome.path.len());
    }
}
