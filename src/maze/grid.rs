use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cell::Cell;
use crate::error::MazeError;

/// Row-major matrix of cells. Origin `(0, 0)` is the top-left corner;
/// `x` indexes columns and `y` indexes rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every position set to `cell`.
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.width as usize)
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = MazeError;

    /// Builds a grid from its wire encoding, rejecting empty, ragged, and
    /// non-binary input.
    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidGrid("grid must be non-empty".into()));
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(MazeError::InvalidGrid(format!(
                "grid dimensions {width}x{height} exceed the supported maximum"
            )));
        }
        let mut grid = Grid::new(width as u16, height as u16, Cell::Wall);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::InvalidGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, value) in row.into_iter().enumerate() {
                grid[(x as u16, y as u16)] = Cell::try_from(value)?;
            }
        }
        Ok(grid)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height as usize))?;
        for row in self.rows() {
            let encoded: Vec<u8> = row.iter().map(|&cell| u8::from(cell)).collect();
            seq.serialize_element(&encoded)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Grid::try_from(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 3, Cell::Wall);
        grid[(4, 2)] = Cell::Path;
        assert_eq!(grid[(4, 2)], Cell::Path);
        assert_eq!(grid[(0, 0)], Cell::Wall);
        assert!(grid.is_in_bounds((4, 2)));
        assert!(!grid.is_in_bounds((5, 2)));
        assert!(!grid.is_in_bounds((4, 3)));
    }

    #[test]
    fn test_grid_serde_round_trip() {
        let mut grid = Grid::new(3, 2, Cell::Wall);
        grid[(0, 0)] = Cell::Path;
        grid[(2, 1)] = Cell::Path;

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,1,1],[1,1,0]]");
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        let result: Result<Grid, _> = serde_json::from_str("[[0,1],[0]]");
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_rejects_non_binary_cells() {
        let result: Result<Grid, _> = serde_json::from_str("[[0,2]]");
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_rejects_empty() {
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>("[[]]").is_err());
    }
}
