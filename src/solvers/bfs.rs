use std::collections::{HashMap, HashSet, VecDeque};

use super::{SearchOutcome, Step, get_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid};

/// Breadth-first search. Expands nodes in non-decreasing distance order, so
/// the first time the goal is popped the reconstructed path is shortest in
/// edge count.
pub(super) fn solve_bfs(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<Coord> = HashSet::from([start]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut steps = Vec::new();

    while let Some(current) = queue.pop_front() {
        steps.push(Step {
            current,
            visited: visited.iter().copied().collect(),
            frontier: queue.iter().copied().collect(),
        });

        if current == goal {
            return SearchOutcome {
                path: reconstruct_path(&came_from, current),
                nodes_explored: visited.len(),
                steps,
            };
        }

        for neighbor in get_neighbors(grid, current) {
            // Mark visited at enqueue time so a node is never queued twice
            if visited.insert(neighbor) {
                came_from.insert(neighbor, current);
                queue.push_back(neighbor);
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
    fn test_bfs_takes_shortest_route_around_wall() {
        // 3x3 with a wall in the center: the corner-to-corner path still
        // needs exactly 4 moves.
        let mut grid = Grid::new(3, 3, Cell::Path);
        grid[(1, 1)] = Cell::Wall;
        let outcome = solve_bfs(&grid, (0, 0), (2, 2));
        assert_eq!(outcome.path.len(), 5);
        assert_eq!(outcome.path.first(), Some(&(0, 0)));
        assert_eq!(outcome.path.last(), Some(&(2, 2)));
    }

    #[test]
    fn test_bfs_frontier_snapshots_grow_then_drain() {
        let grid = Grid::new(2, 2, Cell::Path);
        let outcome = solve_bfs(&grid, (0, 0), (1, 1));
        // Expansion order: (0,0) with empty frontier, then its two neighbors
        assert!(outcome.steps[0].frontier.is_empty());
        assert_eq!(outcome.steps[1].frontier.len(), 1);
        assert_eq!(outcome.nodes_explored, 4);
    }
}
