// Core module exports

mod macros;

pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use moves::Move;
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{ParseSquareError, Square, SquareAddError};
pub use types::{Colour, Direction, ParseColourError};
