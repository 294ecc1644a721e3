//! Text codec for the comma-separated board grid the surrounding tooling
//! speaks: 10 lines of 10 cell codes, an empty code for an empty cell and a
//! two-character piece code (`MW`, `KB`, ...) otherwise.
//!
//! Parsing is purely syntactic; whether the pieces sit on legal squares is
//! [`Board::validate`]'s concern.

use super::Board;
use crate::core::*;
use thiserror::Error;

/******************************************\
|==========================================|
|               Parse Board                |
|==========================================|
\******************************************/

impl Board {
    /// Parses the 10-line board grid, a convenience alias for `str::parse`
    pub fn from_text(text: &str) -> Result<Self, BoardParseError> {
        text.parse()
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != Square::SIDE as usize {
            return Err(BoardParseError::InvalidRowCount(lines.len()));
        }

        let mut board = Board::empty();

        for (row, line) in lines.iter().enumerate() {
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() != Square::SIDE as usize {
                return Err(BoardParseError::InvalidCellCount {
                    row,
                    count: cells.len(),
                });
            }

            for (col, code) in cells.iter().enumerate() {
                let code = code.trim();
                if code.is_empty() {
                    continue;
                }

                let piece = code
                    .parse::<Piece>()
                    .map_err(|_| BoardParseError::InvalidCellCode {
                        code: code.to_string(),
                        row,
                        col,
                    })?;

                // Row and column are both below 10 by construction
                let square = unsafe { Square::from_unchecked((row * 10 + col) as u8) };
                board.put(square, piece);
            }
        }

        Ok(board)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    /// Writes the board back out in the same 10-line grid it parses from
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Square::SIDE {
            for col in 0..Square::SIDE {
                let square = unsafe { Square::from_unchecked(row * 10 + col) };
                if let Some(piece) = self.on(square) {
                    write!(f, "{}", piece)?;
                }
                if col != Square::SIDE - 1 {
                    write!(f, ",")?;
                }
            }
            if row != Square::SIDE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/******************************************\
|==========================================|
|            Board Parse Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("Invalid number of rows: {0}, expected 10")]
    InvalidRowCount(usize),
    #[error("Invalid number of cells in row {row}: {count}, expected 10")]
    InvalidCellCount { row: usize, count: usize },
    #[error("Invalid cell code '{code}' at row {row}, column {col}")]
    InvalidCellCode {
        code: String,
        row: usize,
        col: usize,
    },
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
