use thiserror::Error;

use crate::Square;

/// A supplied square lies outside the grid. Surfaced to the caller, never
/// silently clamped.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("square {0} is outside the board")]
pub struct OffBoardError(pub Square);

/// The initial layout could not be turned into a board. Fatal to
/// construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unrecognized piece token `{0}`")]
    UnknownPiece(String),
    #[error("layout rows have uneven lengths")]
    UnevenRows,
    #[error("layout holds no squares")]
    Empty,
}

/// A malformed text coordinate. Recoverable: the driver re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate text must be exactly 2 characters, got {0}")]
    Length(usize),
    #[error("`{0}` is not a column letter between A and H")]
    Column(char),
    #[error("`{0}` is not a row digit between 1 and 8")]
    Row(char),
}
