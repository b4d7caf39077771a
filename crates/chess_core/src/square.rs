use std::fmt;

use crate::error::CoordError;

/// A board coordinate: 0-indexed row and column.
///
/// Row 0 is the top row of the rendered board (black's back rank in the
/// standard layout), column 0 is the `A` file. Components are signed so that
/// delta arithmetic may step off the grid; the board decides what is in
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The square reached by stepping `d_row` rows and `d_col` columns.
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Parses the 2-character text form: column letter `A`-`H`
    /// (case-insensitive) followed by a 1-indexed row digit. `"A1"` is
    /// `(0, 0)`, `"H8"` is `(7, 7)`.
    pub fn from_text(text: &str) -> Result<Self, CoordError> {
        let mut chars = text.chars();
        let (column, row) = match (chars.next(), chars.next(), chars.next()) {
            (Some(column), Some(row), None) => (column, row),
            _ => return Err(CoordError::Length(text.chars().count())),
        };
        let column = column.to_ascii_uppercase();
        if !('A'..='H').contains(&column) {
            return Err(CoordError::Column(column));
        }
        if !('1'..='8').contains(&row) {
            return Err(CoordError::Row(row));
        }
        Ok(Self {
            row: (row as u8 - b'1') as i8,
            col: (column as u8 - b'A') as i8,
        })
    }

    /// Canonical text form of an on-board square: `(0, 0)` becomes `"A1"`.
    pub fn to_text(self) -> String {
        let column = char::from_u32(('A' as u32).wrapping_add(self.col as u32)).unwrap_or('?');
        format!("{}{}", column, i32::from(self.row) + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod square_tests;
