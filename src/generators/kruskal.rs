use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::maze::{Cell, Coord, Grid};

/// Flat-array union-find over lattice cells with iterative path compression.
/// No union-by-rank; the load is small enough that plain attachment is fine.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new(size: u32) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression: point everything on the walk directly at the root
        let mut current = x;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`, attaching `x`'s root under
    /// `y`'s. Returns false if they were already in the same set.
    fn union(&mut self, x: u32, y: u32) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x as usize] = root_y;
        true
    }
}

/// Edge between two lattice-adjacent cells and the midpoint separating them.
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
    wall: Coord,
}

/// Randomized Kruskal's algorithm: carve every lattice cell up front, then
/// knock down walls from a shuffled edge list whenever they separate two
/// disjoint sets. Produces a perfect maze.
pub(super) fn randomized_kruskal(grid: &mut Grid, rng: &mut StdRng) {
    let width = grid.width();
    let height = grid.height();
    // Number of lattice cells per row/column (even coordinates only)
    let lattice_width = width.div_ceil(2) as u32;
    let lattice_height = height.div_ceil(2) as u32;

    let mut edges = Vec::new();
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            grid[(x, y)] = Cell::Path;
            if x + 2 < width {
                edges.push(Edge {
                    cell1: (x, y),
                    cell2: (x + 2, y),
                    wall: (x + 1, y),
                });
            }
            if y + 2 < height {
                edges.push(Edge {
                    cell1: (x, y),
                    cell2: (x, y + 2),
                    wall: (x, y + 1),
                });
            }
        }
    }

    edges.shuffle(rng);

    let lattice_index = |(x, y): Coord| (y as u32 / 2) * lattice_width + (x as u32 / 2);

    let mut uf = UnionFind::new(lattice_width * lattice_height);
    for edge in edges {
        if uf.union(lattice_index(edge.cell1), lattice_index(edge.cell2)) {
            grid[edge.wall] = Cell::Path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(0, 2));
        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(0), uf.find(4));
        // root1 attaches under root2
        assert_eq!(uf.find(1), uf.find(3));
    }

    #[test]
    fn test_kruskal_joins_all_lattice_cells() {
        let mut grid = Grid::new(9, 9, Cell::Wall);
        let mut rng = StdRng::seed_from_u64(5);
        randomized_kruskal(&mut grid, &mut rng);

        for y in (0..9).step_by(2) {
            for x in (0..9).step_by(2) {
                assert_eq!(grid[(x, y)], Cell::Path, "lattice cell ({x}, {y})");
            }
        }
        // A spanning tree over a 5x5 lattice carves exactly 24 midpoints
        let carved_midpoints = (0..9)
            .flat_map(|y| (0..9).map(move |x| (x, y)))
            .filter(|&(x, y)| (x % 2 == 1) ^ (y % 2 == 1))
            .filter(|&c| grid[c] == Cell::Path)
            .count();
        assert_eq!(carved_midpoints, 24);
    }
}
