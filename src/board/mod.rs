pub mod movegen;
pub mod text;

pub use text::BoardParseError;

use crate::core::*;
use thiserror::Error;

/******************************************\
|==========================================|
|            Board Representation          |
|==========================================|
\******************************************/

/// # Board representation
///
/// A plain mailbox of the full 10x10 grid, one cell per square. Pieces may
/// only ever occupy the 50 dark squares; [`Board::validate`] checks that
/// invariant and move generation refuses boards that break it.
///
/// The board is a value: move generation never mutates it, and
/// [`Board::apply`] returns the successor position instead of editing in
/// place.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::NUM],
}

impl Default for Board {
    /// The international draughts opening position: 20 black men on the
    /// playable squares of rows 0-3, 20 white men on rows 6-9.
    fn default() -> Self {
        let mut board = Board::empty();

        for row in 0..4 {
            board.fill_row(row, Piece::BlackMan);
        }
        for row in 6..Square::SIDE {
            board.fill_row(row, Piece::WhiteMan);
        }

        board
    }
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Board {
    /// Creates a board with no pieces on it
    pub const fn empty() -> Self {
        Board {
            cells: [None; Square::NUM],
        }
    }

    /// Returns the piece on a square, if any
    #[inline]
    pub const fn on(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Places a piece on a square, replacing whatever was there
    #[inline]
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.cells[square.index()] = Some(piece);
    }

    /// Removes and returns the piece on a square
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Iterates over the pieces of one colour, in square index order
    pub fn pieces(&self, colour: Colour) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.on(square) {
            Some(piece) if piece.colour() == colour => Some((square, piece)),
            _ => None,
        })
    }

    /// Checks the board's well-formedness invariant: every occupied cell
    /// must lie on a playable (dark) square.
    pub fn validate(&self) -> Result<(), InvalidBoardError> {
        for square in Square::iter() {
            if let Some(piece) = self.on(square) {
                if !square.is_playable() {
                    return Err(InvalidBoardError::UnplayableSquare { piece, square });
                }
            }
        }
        Ok(())
    }

    /// Returns the position after playing `mv`: the piece lands on the final
    /// square of the path, every captured piece is removed, and a man ending
    /// the move on its promotion row becomes a king.
    ///
    /// Promotion happens only at the end of the whole sequence: a man that
    /// merely passes through the back rank mid-jump stays a man.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();

        if let Some(mut piece) = next.take(mv.from()) {
            for &square in mv.captured() {
                next.take(square);
            }

            if piece.pt() == PieceType::Man && mv.to().row() == piece.colour().promotion_row() {
                piece = Piece::from_parts(piece.colour(), PieceType::King);
            }

            next.put(mv.to(), piece);
        } else {
            debug_assert!(false, "Move starts from an empty square");
        }

        next
    }

    /// Puts a man of the given piece value on every playable cell of a row
    fn fill_row(&mut self, row: u8, piece: Piece) {
        for col in 0..Square::SIDE {
            if let Ok(square) = Square::from_coords(row, col) {
                if square.is_playable() {
                    self.put(square, piece);
                }
            }
        }
    }
}

/******************************************\
|==========================================|
|            Invalid Board Error           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("Piece '{piece}' on non-playable square {square}")]
    UnplayableSquare { piece: Piece, square: Square },
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
