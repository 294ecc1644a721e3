//! # Draughts
//!
//! A legal-move generator for international (10x10) draughts, enforcing
//! mandatory capture and maximal-length multi-jump sequences.
pub mod board;
pub mod core;

pub use board::{Board, BoardParseError, InvalidBoardError};
pub use core::*;
