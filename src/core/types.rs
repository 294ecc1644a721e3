use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two sides in draughts: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Represents the four diagonal directions a draughts piece can travel in,
/// as offsets on a row-major 10x10 grid. "Up" is towards row 0, the rank
/// White promotes on.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    UpLeft = -11, UpRight = -9,
    DownLeft = 9, DownRight = 11,
}

crate::impl_from_to_primitive!(Direction, i8);

impl Direction {
    /// All diagonal directions, in the fixed scan order used by move
    /// generation (up-left, up-right, down-left, down-right). The order is
    /// what makes generation reproducible across runs.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the forward-left diagonal (towards the opponent) for a colour
    pub const fn forward_left(&self) -> Direction {
        match self {
            Colour::White => Direction::UpLeft,
            Colour::Black => Direction::DownLeft,
        }
    }

    /// Returns the forward-right diagonal (towards the opponent) for a colour
    pub const fn forward_right(&self) -> Direction {
        match self {
            Colour::White => Direction::UpRight,
            Colour::Black => Direction::DownRight,
        }
    }

    /// Returns both forward diagonals for a colour, left before right
    pub const fn forwards(&self) -> [Direction; 2] {
        [self.forward_left(), self.forward_right()]
    }

    /// Returns the row on which a man of this colour promotes to king
    pub const fn promotion_row(&self) -> u8 {
        match self {
            Colour::White => 0,
            Colour::Black => 9,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (UpLeft => DownRight, etc...)
    fn neg(self) -> Self::Output {
        Self::from_unchecked(-(self as i8))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Colour {
    /// Displays the colour as its single-letter code ('W' or 'B')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "W"),
            Colour::Black => write!(f, "B"),
        }
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Colour {
    type Err = ParseColourError;

    /// Parses the colour string into a colour, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::core::{Colour, ParseColourError};
    ///
    /// assert_eq!("W".parse::<Colour>().unwrap(), Colour::White);
    /// assert_eq!("B".parse::<Colour>().unwrap(), Colour::Black);
    /// assert!(matches!("x".parse::<Colour>(), Err(ParseColourError::InvalidChar('x'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseColourError::InvalidLength(s.len()));
        }

        let colour_char = s.chars().next().unwrap();
        match colour_char {
            'W' => Ok(Colour::White),
            'B' => Ok(Colour::Black),
            _ => Err(ParseColourError::InvalidChar(colour_char)),
        }
    }
}

/******************************************\
|==========================================|
|            Colour Parse Error            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColourError {
    #[error("Invalid length for colour string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for colour string: '{0}', expected 'W' or 'B'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
