use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Represents the coloured draughts pieces
/// - The colour lives in the lowest bit, the piece type in the next one

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    WhiteMan, BlackMan, WhiteKing, BlackKing,
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 4;
}

crate::impl_from_to_primitive!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the two draughts piece types: the man and the promoted king

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Man, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::core::{Piece, Colour, PieceType};
    ///
    /// assert_eq!(Piece::from_parts(Colour::White, PieceType::Man), Piece::WhiteMan);
    /// assert_eq!(Piece::from_parts(Colour::Black, PieceType::King), Piece::BlackKing);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::Man => write!(f, "M"),
            PieceType::King => write!(f, "K"),
        }
    }
}

impl std::fmt::Display for Piece {
    /// Displays the piece as its two-character cell code, piece type letter
    /// first (WhiteMan => "MW", BlackKing => "KB")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pt(), self.colour())
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the two-character cell code into a piece, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::core::{Piece, ParsePieceError};
    ///
    /// assert_eq!("MW".parse::<Piece>().unwrap(), Piece::WhiteMan);
    /// assert_eq!("KB".parse::<Piece>().unwrap(), Piece::BlackKing);
    /// assert!(matches!("XW".parse::<Piece>(), Err(ParsePieceError::InvalidTypeChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParsePieceError::InvalidLength(s.len()));
        }

        let mut chars = s.chars();
        let type_char = chars.next().unwrap();
        let colour_char = chars.next().unwrap();

        let piece_type = match type_char {
            'M' => PieceType::Man,
            'K' => PieceType::King,
            _ => return Err(ParsePieceError::InvalidTypeChar(type_char)),
        };
        let colour = match colour_char {
            'W' => Colour::White,
            'B' => Colour::Black,
            _ => return Err(ParsePieceError::InvalidColourChar(colour_char)),
        };

        Ok(Piece::from_parts(colour, piece_type))
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid piece type character: '{0}', expected 'M' or 'K'")]
    InvalidTypeChar(char),
    #[error("Invalid piece colour character: '{0}', expected 'W' or 'B'")]
    InvalidColourChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type_extraction() {
        assert_eq!(Piece::WhiteMan.pt(), PieceType::Man);
        assert_eq!(Piece::BlackMan.pt(), PieceType::Man);
        assert_eq!(Piece::WhiteKing.pt(), PieceType::King);
        assert_eq!(Piece::BlackKing.pt(), PieceType::King);
    }

    #[test]
    fn test_piece_colour_extraction() {
        assert_eq!(Piece::WhiteMan.colour(), Colour::White);
        assert_eq!(Piece::WhiteKing.colour(), Colour::White);
        assert_eq!(Piece::BlackMan.colour(), Colour::Black);
        assert_eq!(Piece::BlackKing.colour(), Colour::Black);
    }

    #[test]
    fn test_create_piece_from_colour_and_type() {
        assert_eq!(
            Piece::from_parts(Colour::White, PieceType::Man),
            Piece::WhiteMan
        );
        assert_eq!(
            Piece::from_parts(Colour::White, PieceType::King),
            Piece::WhiteKing
        );
        assert_eq!(
            Piece::from_parts(Colour::Black, PieceType::Man),
            Piece::BlackMan
        );
        assert_eq!(
            Piece::from_parts(Colour::Black, PieceType::King),
            Piece::BlackKing
        );
    }

    #[test]
    fn test_piece_conversion_roundtrip() {
        for piece in Piece::iter() {
            let colour = piece.colour();
            let piece_type = piece.pt();
            let reconstructed = Piece::from_parts(colour, piece_type);
            assert_eq!(piece, reconstructed);
        }
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::WhiteMan.to_string(), "MW");
        assert_eq!(Piece::BlackMan.to_string(), "MB");
        assert_eq!(Piece::WhiteKing.to_string(), "KW");
        assert_eq!(Piece::BlackKing.to_string(), "KB");
    }

    #[test]
    fn test_piece_from_str_valid() {
        assert_eq!("MW".parse::<Piece>().unwrap(), Piece::WhiteMan);
        assert_eq!("MB".parse::<Piece>().unwrap(), Piece::BlackMan);
        assert_eq!("KW".parse::<Piece>().unwrap(), Piece::WhiteKing);
        assert_eq!("KB".parse::<Piece>().unwrap(), Piece::BlackKing);
    }

    #[test]
    fn test_piece_from_str_invalid() {
        assert!(matches!(
            "".parse::<Piece>(),
            Err(ParsePieceError::InvalidLength(0))
        ));
        assert!(matches!(
            "M".parse::<Piece>(),
            Err(ParsePieceError::InvalidLength(1))
        ));
        assert!(matches!(
            "MWB".parse::<Piece>(),
            Err(ParsePieceError::InvalidLength(3))
        ));

        assert!(matches!(
            "XW".parse::<Piece>(),
            Err(ParsePieceError::InvalidTypeChar('X'))
        ));
        assert!(matches!(
            "mW".parse::<Piece>(),
            Err(ParsePieceError::InvalidTypeChar('m'))
        ));
        assert!(matches!(
            "WM".parse::<Piece>(),
            Err(ParsePieceError::InvalidTypeChar('W'))
        ));

        assert!(matches!(
            "MX".parse::<Piece>(),
            Err(ParsePieceError::InvalidColourChar('X'))
        ));
        assert!(matches!(
            "Kw".parse::<Piece>(),
            Err(ParsePieceError::InvalidColourChar('w'))
        ));
    }

    #[test]
    fn test_piece_string_roundtrip() {
        for piece in Piece::iter() {
            assert_eq!(piece.to_string().parse::<Piece>().unwrap(), piece);
        }
    }
}
