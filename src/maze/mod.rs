pub mod cell;
mod grid;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use cell::Cell;
pub use grid::Grid;

use crate::error::MazeError;
use crate::generators::Generator;

/// A cell position as `(x, y)`: `x` indexes columns, `y` indexes rows.
pub type Coord = (u16, u16);

/// A generated maze together with its endpoints.
///
/// `start` is always `(0, 0)`. `end` is the bottom-right corner if that cell
/// was carved, otherwise the nearest carved cell found by scanning backward
/// from the bottom-right (last row first, rightmost column first within a
/// row). The serialized form round-trips losslessly, so a maze read back from
/// storage is identical to the one the generator produced. Deserialization
/// validates the record, so a hand-edited one whose dimensions or endpoints
/// disagree with the embedded grid is rejected instead of producing an
/// inconsistent maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMaze")]
pub struct Maze {
    width: u16,
    height: u16,
    grid: Grid,
    start: Coord,
    end: Coord,
    algorithm: Generator,
}

/// Wire form of a maze, before the consistency checks.
#[derive(Deserialize)]
struct RawMaze {
    width: u16,
    height: u16,
    grid: Grid,
    start: Coord,
    end: Coord,
    algorithm: Generator,
}

impl TryFrom<RawMaze> for Maze {
    type Error = MazeError;

    fn try_from(raw: RawMaze) -> Result<Self, Self::Error> {
        if raw.width != raw.grid.width() || raw.height != raw.grid.height() {
            return Err(MazeError::InvalidGrid(format!(
                "stored dimensions {}x{} do not match the grid's {}x{}",
                raw.width,
                raw.height,
                raw.grid.width(),
                raw.grid.height()
            )));
        }
        for coord in [raw.start, raw.end] {
            if !raw.grid.is_in_bounds(coord) || raw.grid[coord] != Cell::Path {
                return Err(MazeError::InvalidCoordinate(coord));
            }
        }
        Ok(Maze {
            width: raw.width,
            height: raw.height,
            grid: raw.grid,
            start: raw.start,
            end: raw.end,
            algorithm: raw.algorithm,
        })
    }
}

impl Maze {
    pub(crate) fn new(grid: Grid, start: Coord, end: Coord, algorithm: Generator) -> Self {
        Maze {
            width: grid.width(),
            height: grid.height(),
            grid,
            start,
            end,
            algorithm,
        }
    }

    /// Width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn algorithm(&self) -> Generator {
        self.algorithm
    }

    /// Renders the maze as text, one line per grid row.
    pub fn render(&self) -> String {
        self.render_with_path(&[])
    }

    /// Renders the maze with a solution path overlaid. Start and end cells
    /// are marked even when the path is empty.
    pub fn render_with_path(&self, path: &[Coord]) -> String {
        let mut out = String::with_capacity(
            (self.width as usize * Cell::CELL_WIDTH + 1) * self.height as usize,
        );
        for (y, row) in self.grid.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let coord = (x as u16, y as u16);
                if coord == self.start {
                    out.push_str("S ");
                } else if coord == self.end {
                    out.push_str("E ");
                } else if path.contains(&coord) {
                    out.push_str("··");
                } else {
                    out.push_str(&cell.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_serde_round_trip() {
        let mut grid = Grid::new(3, 3, Cell::Wall);
        grid[(0, 0)] = Cell::Path;
        grid[(1, 0)] = Cell::Path;
        grid[(2, 0)] = Cell::Path;
        let maze = Maze::new(grid, (0, 0), (2, 0), Generator::Prims);

        let json = serde_json::to_string(&maze).unwrap();
        let restored: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, maze);
        assert!(json.contains("\"algorithm\":\"prims\""));
        assert!(json.contains("\"grid\":[[0,0,0],[1,1,1],[1,1,1]]"));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_records() {
        // Stored width disagrees with the grid
        let json =
            r#"{"width":4,"height":1,"grid":[[0,0]],"start":[0,0],"end":[1,0],"algorithm":"prims"}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
        // Start sits on a wall
        let json =
            r#"{"width":2,"height":1,"grid":[[1,0]],"start":[0,0],"end":[1,0],"algorithm":"prims"}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
        // End is out of bounds
        let json =
            r#"{"width":2,"height":1,"grid":[[0,0]],"start":[0,0],"end":[2,0],"algorithm":"prims"}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
        // The consistent record still parses
        let json =
            r#"{"width":2,"height":1,"grid":[[0,0]],"start":[0,0],"end":[1,0],"algorithm":"prims"}"#;
        let maze: Maze = serde_json::from_str(json).unwrap();
        assert_eq!(maze.end(), (1, 0));
    }

    #[test]
    fn test_render_marks_endpoints() {
        let grid = Grid::new(2, 1, Cell::Path);
        let maze = Maze::new(grid, (0, 0), (1, 0), Generator::Kruskals);
        assert_eq!(maze.render(), "S E \n");
    }
}
