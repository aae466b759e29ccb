use std::fmt;

use crate::error::MazeError;

/// One grid position: either carved passage or solid wall.
///
/// The discriminants are the wire encoding: a stored grid is a nested array
/// of `0` (path) and `1` (wall).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Path = 0,
    Wall = 1,
}

impl Cell {
    /// The width of each cell when rendered as text, in characters.
    pub const CELL_WIDTH: usize = 2;
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Path),
            1 => Ok(Cell::Wall),
            other => Err(MazeError::InvalidGrid(format!(
                "cell value must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Path => "  ",
            Cell::Wall => "██",
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_wire_encoding() {
        assert_eq!(u8::from(Cell::Path), 0);
        assert_eq!(u8::from(Cell::Wall), 1);
        assert_eq!(Cell::try_from(0), Ok(Cell::Path));
        assert_eq!(Cell::try_from(1), Ok(Cell::Wall));
        assert!(matches!(Cell::try_from(2), Err(MazeError::InvalidGrid(_))));
    }
}
