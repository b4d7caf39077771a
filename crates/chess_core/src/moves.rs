use std::fmt;

use crate::Square;

/// An ordered (start, destination) pair. Produced transiently by move
/// enumeration and search; carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from.to_text(), self.to.to_text())
    }
}
