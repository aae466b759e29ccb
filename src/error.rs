use thiserror::Error;

use crate::maze::Coord;

/// Errors produced by the maze engine.
///
/// `UnsupportedAlgorithm` is the only error intrinsic to the engine; the
/// geometry variants exist so that a caller handing us an incoherent grid
/// fails fast instead of getting a silently wrong answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// An algorithm name that neither the generators nor the solvers know.
    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    /// The grid is empty, ragged, or contains cell values other than 0/1.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    /// A start/end coordinate that is out of bounds or sits on a wall.
    #[error("invalid coordinate {0:?}: out of bounds or not a path cell")]
    InvalidCoordinate(Coord),
}
