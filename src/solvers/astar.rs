use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{SearchOutcome, Step, get_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid};

/// Manhattan distance: admissible and consistent on a unit-cost 4-connected
/// grid, which is what makes the first pop of the goal optimal.
fn manhattan(a: Coord, b: Coord) -> u32 {
    // Widen before adding: the two u16 distances can sum past u16::MAX
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// A* search over a min-heap keyed by `(f, counter)`. The strictly
/// increasing counter breaks ties FIFO among equal `f`, making pop order
/// deterministic. Duplicate heap entries are allowed and resolved by lazy
/// deletion instead of decrease-key.
pub(super) fn solve_astar(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
    let mut open: BinaryHeap<Reverse<(u32, u64, Coord)>> = BinaryHeap::new();
    let mut counter: u64 = 0;
    open.push(Reverse((manhattan(start, goal), counter, start)));

    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut g_score: HashMap<Coord, u32> = HashMap::from([(start, 0)]);
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut steps = Vec::new();

    while let Some(Reverse((_, _, current))) = open.pop() {
        // Lazy deletion: skip stale entries for already expanded nodes
        if !visited.insert(current) {
            continue;
        }

        steps.push(Step {
            current,
            visited: visited.iter().copied().collect(),
            // The heap snapshot deliberately includes stale entries
            frontier: open.iter().map(|Reverse((_, _, node))| *node).collect(),
        });

        if current == goal {
            return SearchOutcome {
                path: reconstruct_path(&came_from, current),
                nodes_explored: visited.len(),
                steps,
            };
        }

        let tentative_g = g_score[&current] + 1;
        for neighbor in get_neighbors(grid, current) {
            if g_score.get(&neighbor).is_none_or(|&g| tentative_g < g) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                if !visited.contains(&neighbor) {
                    counter += 1;
                    open.push(Reverse((
                        tentative_g + manhattan(neighbor, goal),
                        counter,
                        neighbor,
                    )));
                }
            }
        }
    }

    SearchOutcome {
        path: Vec::new(),
        nodes_explored: visited.len(),
        steps,
    }
}
