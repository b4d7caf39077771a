use std::fmt;

use log::{debug, trace};

use crate::error::{LayoutError, OffBoardError};
use crate::{Color, Move, Piece, PieceKind, Square};

/// Token marking an empty square in a layout.
pub const EMPTY_TOKEN: &str = "__";

/// The standard starting layout: black's back rank on row 0, white's pieces
/// on rows 6 and 7, both kings on column 4.
const STANDARD_LAYOUT: [[&str; 8]; 8] = [
    ["bR", "bN", "bB", "bQ", "bK", "bB", "bN", "bR"],
    ["bP"; 8],
    ["__"; 8],
    ["__"; 8],
    ["__"; 8],
    ["__"; 8],
    ["wP"; 8],
    ["wR", "wN", "wB", "wQ", "wK", "wB", "wN", "wR"],
];

/// A rectangular grid of optional pieces. Dimensions are fixed at
/// construction; cloning deep-copies every piece, so a clone shares no
/// mutable state with the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Vec<Vec<Option<Piece>>>,
}

impl Board {
    /// Builds a board from a rectangular grid of two-character tokens:
    /// `__` for an empty square, otherwise a color flag (`w`/`b`) followed
    /// by a piece letter (`P R N B Q K`).
    pub fn parse(rows: &[Vec<&str>]) -> Result<Self, LayoutError> {
        let n_cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if n_cols == 0 {
            return Err(LayoutError::Empty);
        }
        let mut grid = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(LayoutError::UnevenRows);
            }
            let mut cells = Vec::with_capacity(n_cols);
            for (col_idx, token) in row.iter().enumerate() {
                cells.push(parse_token(
                    token,
                    Square::new(row_idx as i8, col_idx as i8),
                )?);
            }
            grid.push(cells);
        }
        Ok(Self { grid })
    }

    pub fn standard() -> Self {
        let rows: Vec<Vec<&str>> = STANDARD_LAYOUT.iter().map(|row| row.to_vec()).collect();
        Self::parse(&rows).expect("standard layout is well-formed")
    }

    pub fn n_rows(&self) -> i8 {
        self.grid.len() as i8
    }

    pub fn n_cols(&self) -> i8 {
        self.grid[0].len() as i8
    }

    pub fn contains(&self, square: Square) -> bool {
        square.row >= 0
            && square.row < self.n_rows()
            && square.col >= 0
            && square.col < self.n_cols()
    }

    /// The piece at `square`, if any. Off-grid squares read as empty.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        if !self.contains(square) {
            return None;
        }
        self.grid[square.row as usize][square.col as usize].as_ref()
    }

    /// All placed pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().filter_map(|cell| cell.as_ref())
    }

    /// Legality pipeline. Off-grid squares are an error; every other
    /// rejection is an ordinary `Ok(false)`.
    pub fn move_valid(&self, from: Square, to: Square, mover: Color) -> Result<bool, OffBoardError> {
        if !self.contains(from) {
            return Err(OffBoardError(from));
        }
        if !self.contains(to) {
            return Err(OffBoardError(to));
        }
        if from == to {
            trace!("rejected {from}: piece cannot stay in place");
            return Ok(false);
        }
        let Some(piece) = self.piece_at(from) else {
            trace!("rejected {from}: no piece at start");
            return Ok(false);
        };
        if piece.color != mover {
            trace!("rejected {from}: piece belongs to {}", piece.color);
            return Ok(false);
        }
        Ok(piece.move_allowed(from, to, self))
    }

    /// Validates and applies a move, returning whether it was applied. A
    /// rejected move leaves the board untouched. Post-move effects run in
    /// order: a pawn reaching a board-edge row becomes a queen, then a king
    /// that moved two columns drags its rook across (castling).
    pub fn move_piece(&mut self, from: Square, to: Square, mover: Color) -> Result<bool, OffBoardError> {
        if !self.move_valid(from, to, mover)? {
            return Ok(false);
        }
        let Some(mut piece) = self.remove_piece(from) else {
            return Ok(false);
        };
        piece.has_moved = true;
        let kind = piece.kind;
        self.set_piece(to, piece);
        match kind {
            PieceKind::Pawn => self.promote_on_edge(to),
            PieceKind::King => self.complete_castle(from, to),
            _ => {}
        }
        debug!("{mover} moved {} to {}", from.to_text(), to.to_text());
        Ok(true)
    }

    /// True iff any enemy piece could move onto `color`'s king square right
    /// now. A missing king reads as not-in-check; king capture is the
    /// driver's separate loss condition.
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king_square) = self.king_square(color) else {
            return false;
        };
        self.pieces()
            .filter(|piece| piece.color != color)
            .any(|piece| piece.move_allowed(piece.square, king_square, self))
    }

    /// Row-major scan for `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .map(|piece| piece.square)
    }

    /// Every legal (start, destination) pair for `color`, row-major over
    /// the grid and then in per-piece delta order. Search relies on this
    /// order for deterministic tie-breaking.
    pub fn action_space(&self, color: Color) -> Vec<Move> {
        let mut actions = Vec::new();
        for piece in self.pieces() {
            if piece.color == color {
                actions.extend(piece.possible_moves(self));
            }
        }
        actions
    }

    /// One successor board per action in `action_space`, in the same order.
    pub fn state_space(&self, color: Color) -> Vec<Board> {
        self.action_space(color)
            .into_iter()
            .map(|action| {
                let mut successor = self.clone();
                let _ = successor.move_piece(action.from, action.to, color);
                successor
            })
            .collect()
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color)
            && self
                .state_space(color)
                .iter()
                .all(|state| state.in_check(color))
    }

    /// Not currently in check, but every available move would leave the
    /// king attacked. A position with no moves at all also counts.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color)
            && self
                .state_space(color)
                .iter()
                .all(|state| state.in_check(color))
    }

    fn set_piece(&mut self, square: Square, mut piece: Piece) {
        piece.square = square;
        self.grid[square.row as usize][square.col as usize] = Some(piece);
    }

    fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize].take()
    }

    fn promote_on_edge(&mut self, square: Square) {
        if square.row != 0 && square.row != self.n_rows() - 1 {
            return;
        }
        if let Some(pawn) = self.remove_piece(square) {
            let mut queen = Piece::new(PieceKind::Queen, pawn.color, square);
            queen.has_moved = true;
            self.set_piece(square, queen);
            debug!("{} pawn promoted at {}", pawn.color, square.to_text());
        }
    }

    fn complete_castle(&mut self, from: Square, to: Square) {
        let d_col = to.col - from.col;
        if d_col.abs() != 2 {
            return;
        }
        let (rook_from, rook_to) = if d_col > 0 {
            (
                Square::new(to.row, self.n_cols() - 1),
                Square::new(to.row, to.col - 1),
            )
        } else {
            (Square::new(to.row, 0), Square::new(to.row, to.col + 1))
        };
        if let Some(mut rook) = self.remove_piece(rook_from) {
            rook.has_moved = true;
            self.set_piece(rook_to, rook);
            debug!("castle completed, rook to {}", rook_to.to_text());
        }
    }
}

fn parse_token(token: &str, square: Square) -> Result<Option<Piece>, LayoutError> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }
    let mut chars = token.chars();
    let (flag, letter) = match (chars.next(), chars.next(), chars.next()) {
        (Some(flag), Some(letter), None) => (flag, letter),
        _ => return Err(LayoutError::UnknownPiece(token.to_string())),
    };
    let kind = PieceKind::from_letter(letter)
        .ok_or_else(|| LayoutError::UnknownPiece(token.to_string()))?;
    let color = if flag == 'w' { Color::White } else { Color::Black };
    Ok(Some(Piece::new(kind, color, square)))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.grid.iter().enumerate() {
            write!(f, "{}  ", idx + 1)?;
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{}  ", piece.symbol())?,
                    None => write!(f, " .  ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..self.n_cols() {
            let letter = char::from_u32(('A' as u32).wrapping_add(col as u32)).unwrap_or('?');
            write!(f, " {}  ", letter)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
