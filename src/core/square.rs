use super::types::Direction;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents a cell of the 10x10 draughts board, stored as `row * 10 + col`
/// - Row 0 is the far rank from White's perspective: White men move towards
///   row 0 and promote there, Black men towards row 9
/// - Only cells where `row + col` is odd are playable (the dark squares);
///   the rest exist so the full grid supplied by the caller stays addressable

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of cells on the board
    pub const NUM: usize = 100;
    /// Number of cells per side
    pub const SIDE: u8 = 10;

    /// Converts a raw cell index to a square without bounds checking
    ///
    /// ## Safety
    /// - The index must be below [`Square::NUM`]
    #[inline]
    pub const unsafe fn from_unchecked(index: u8) -> Self {
        debug_assert!(index < Self::NUM as u8, "Index out of bounds");
        Square(index)
    }

    /// Converts the square to its raw cell index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns iterator for all the squares on the board, in index order
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::NUM as u8).map(Square)
    }

    /// Try to convert from i16 to a square (Returns error if out of bounds)
    pub const fn try_from(value: i16) -> Result<Self, &'static str> {
        if value >= 0 && value < Self::NUM as i16 {
            Ok(Square(value as u8))
        } else {
            Err("Square value out of bounds (0-99)")
        }
    }

    /// Combines a row and column pair to create a square, with bounds checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::core::Square;
    ///
    /// let sq = Square::from_coords(6, 1).unwrap();
    /// assert_eq!(sq.row(), 6);
    /// assert_eq!(sq.col(), 1);
    /// assert!(Square::from_coords(10, 0).is_err());
    /// ```
    pub const fn from_coords(row: u8, col: u8) -> Result<Self, &'static str> {
        if row < Self::SIDE && col < Self::SIDE {
            Ok(Square(row * Self::SIDE + col))
        } else {
            Err("Row and column must both be below 10")
        }
    }

    /// Returns the row of a square (0 at White's far rank)
    #[inline]
    pub const fn row(&self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Returns the column of a square
    #[inline]
    pub const fn col(&self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Whether the square is one of the 50 dark cells pieces may occupy
    #[inline]
    pub const fn is_playable(&self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Try to add a diagonal direction to a square
    ///
    /// Fails when the step would wrap around a board edge or leave the grid.
    #[inline]
    pub const fn add(self, rhs: Direction) -> Result<Self, SquareAddError> {
        let col = self.col();

        use Direction::*;
        let valid = match rhs {
            UpLeft | DownLeft if col > 0 => true,
            UpRight | DownRight if col < Self::SIDE - 1 => true,
            _ => false,
        };

        match valid {
            true => match Square::try_from(self.0 as i16 + rhs as i16) {
                Ok(sq) => Ok(sq),
                Err(_) => Err(SquareAddError::OutOfBounds),
            },
            false => Err(SquareAddError::OutOfBounds),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Square {
    /// Displays the square as the two-digit `<row><col>` code used by the
    /// surrounding text protocol (row 6, column 1 => "61")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row(), self.col())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses the two-digit square string into a square, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::core::{Square, ParseSquareError};
    ///
    /// assert_eq!("61".parse::<Square>().unwrap(), Square::from_coords(6, 1).unwrap());
    /// assert!(matches!("6x".parse::<Square>(), Err(ParseSquareError::InvalidColChar('x'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParseSquareError::InvalidLength(s.len()));
        }

        let mut chars = s.chars();
        let row_char = chars.next().unwrap();
        let col_char = chars.next().unwrap();

        let row = row_char
            .to_digit(10)
            .ok_or(ParseSquareError::InvalidRowChar(row_char))?;
        let col = col_char
            .to_digit(10)
            .ok_or(ParseSquareError::InvalidColChar(col_char))?;

        // Single decimal digits are always in range for a 10x10 grid
        Ok(Square(row as u8 * Self::SIDE + col as u8))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for square row: '{0}', expected '0'-'9'")]
    InvalidRowChar(char),
    #[error("Invalid character for square column: '{0}', expected '0'-'9'")]
    InvalidColChar(char),
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::from_coords(row, col).unwrap()
    }

    #[test]
    fn test_square_from_coords() {
        assert_eq!(sq(0, 0).index(), 0);
        assert_eq!(sq(6, 1).index(), 61);
        assert_eq!(sq(9, 9).index(), 99);

        assert!(Square::from_coords(10, 0).is_err());
        assert!(Square::from_coords(0, 10).is_err());
        assert!(Square::from_coords(255, 255).is_err());
    }

    #[test]
    fn test_row_and_col() {
        let square = sq(4, 7);
        assert_eq!(square.row(), 4);
        assert_eq!(square.col(), 7);
    }

    #[test]
    fn test_square_conversions() {
        for row in 0..10 {
            for col in 0..10 {
                let square = sq(row, col);
                assert_eq!(square.row(), row);
                assert_eq!(square.col(), col);
            }
        }
    }

    #[test]
    fn test_playability_parity() {
        assert!(sq(6, 1).is_playable());
        assert!(sq(0, 1).is_playable());
        assert!(sq(9, 8).is_playable());

        assert!(!sq(0, 0).is_playable());
        assert!(!sq(5, 5).is_playable());
        assert!(!sq(9, 9).is_playable());

        let playable = Square::iter().filter(Square::is_playable).count();
        assert_eq!(playable, 50);
    }

    #[test]
    fn test_square_plus_direction() {
        assert_eq!(sq(6, 1).add(Direction::UpLeft), Ok(sq(5, 0)));
        assert_eq!(sq(6, 1).add(Direction::UpRight), Ok(sq(5, 2)));
        assert_eq!(sq(6, 1).add(Direction::DownLeft), Ok(sq(7, 0)));
        assert_eq!(sq(6, 1).add(Direction::DownRight), Ok(sq(7, 2)));
    }

    #[test]
    fn test_square_plus_direction_edges() {
        // Left and right columns must not wrap to the neighbouring row
        assert_eq!(sq(5, 0).add(Direction::UpLeft), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(5, 0).add(Direction::DownLeft), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(4, 9).add(Direction::UpRight), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(4, 9).add(Direction::DownRight), Err(SquareAddError::OutOfBounds));

        // Top and bottom rows leave the grid
        assert_eq!(sq(0, 3).add(Direction::UpLeft), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(0, 3).add(Direction::UpRight), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(9, 4).add(Direction::DownLeft), Err(SquareAddError::OutOfBounds));
        assert_eq!(sq(9, 4).add(Direction::DownRight), Err(SquareAddError::OutOfBounds));
    }

    #[test]
    fn test_square_add_roundtrip() {
        for dir in Direction::ALL {
            for square in Square::iter() {
                match square.add(dir) {
                    Ok(new_sq) => assert_eq!(new_sq.add(-dir), Ok(square)),
                    Err(err) => assert_eq!(err, SquareAddError::OutOfBounds),
                }
            }
        }
    }

    #[test]
    fn test_tryfrom_i16_for_square() {
        assert_eq!(Square::try_from(0i16), Ok(sq(0, 0)));
        assert_eq!(Square::try_from(61i16), Ok(sq(6, 1)));
        assert_eq!(Square::try_from(99i16), Ok(sq(9, 9)));

        assert!(Square::try_from(-1i16).is_err());
        assert!(Square::try_from(100i16).is_err());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(sq(6, 1).to_string(), "61");
        assert_eq!(sq(0, 0).to_string(), "00");
        assert_eq!(sq(9, 9).to_string(), "99");
    }

    #[test]
    fn test_square_from_str_valid() {
        assert_eq!("61".parse::<Square>().unwrap(), sq(6, 1));
        assert_eq!("00".parse::<Square>().unwrap(), sq(0, 0));
        assert_eq!("99".parse::<Square>().unwrap(), sq(9, 9));
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!(matches!(
            "6".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(1))
        ));
        assert!(matches!(
            "615".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(3))
        ));
        assert!(matches!(
            "".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(0))
        ));

        assert!(matches!(
            "x1".parse::<Square>(),
            Err(ParseSquareError::InvalidRowChar('x'))
        ));
        assert!(matches!(
            "6x".parse::<Square>(),
            Err(ParseSquareError::InvalidColChar('x'))
        ));
    }
}
