//! # Module: `movegen`
//!
//! Legal-move generation for international draughts.
//!
//! ## Rules implemented
//!
//! - **Mandatory capture**: if any piece of the side to move can capture,
//!   only capture moves are legal that turn.
//! - **Maximality**: among the available captures only the sequences with
//!   the globally maximal number of legs are legal; equal-length sequences
//!   are all returned and choosing between them is the caller's business.
//! - **Multi-jumps**: capture continuations are found by a depth-first
//!   search over a private scratch board. The moving piece vacates its
//!   origin for the whole sequence and each jumped piece is removed for the
//!   rest of its branch, so a sequence can land back on its own starting
//!   square but can never jump the same piece twice.
//! - **Men**: step on the two forward diagonals, capture on all four.
//! - **Kings**: step and capture on all four diagonals, one square at a
//!   time (no flying kings).
//!
//! Directions are always scanned in [`Direction::ALL`] order, so the result
//! is deterministic for a given board and colour.
//!
//! ## Main Entry Point
//!
//! [`Board::generate_moves`] validates the board once, never mutates it,
//! and returns every legal move. An empty result is not an error: it means
//! the side has no legal move, which the caller interprets as the end of
//! the game.

use super::{Board, InvalidBoardError};
use crate::core::*;

/******************************************\
|==========================================|
|              Move Generation             |
|==========================================|
\******************************************/

impl Board {
    /// Enumerates every move `colour` is legally permitted to play on this
    /// board, with mandatory capture and maximal-length precedence applied.
    ///
    /// ## Examples
    ///
    /// ```
    /// use draughts::{Board, Colour};
    ///
    /// let board = Board::default();
    /// let moves = board.generate_moves(Colour::White).unwrap();
    /// // No captures exist at the start, so only simple steps come back
    /// assert!(moves.iter().all(|m| !m.is_capture()));
    /// ```
    pub fn generate_moves(&self, colour: Colour) -> Result<Vec<Move>, InvalidBoardError> {
        self.validate()?;

        let captures = self.generate_captures(colour);
        if !captures.is_empty() {
            let best = captures.iter().map(Move::legs).max().unwrap_or(0);
            return Ok(captures.into_iter().filter(|m| m.legs() == best).collect());
        }

        Ok(self.generate_steps(colour))
    }

    /// Collects every complete capture sequence available to `us`, of any
    /// length; the caller filters for maximality.
    fn generate_captures(&self, us: Colour) -> Vec<Move> {
        let mut moves = Vec::new();

        for (from, _) in self.pieces(us) {
            let mut scratch = self.clone();
            // The mover leaves its square for the whole sequence, so a
            // multi-jump may pass over or land on it again.
            scratch.take(from);

            let mut path = vec![from];
            let mut captured = Vec::new();
            scratch.extend_captures(us, from, &mut path, &mut captured, &mut moves);
        }

        moves
    }

    /// Depth-first capture continuation search from `square`, on a scratch
    /// board (`self` here is the scratch copy, mutated on entry to a branch
    /// and restored on backtrack).
    ///
    /// A root-to-leaf path with at least one leg is one candidate move; a
    /// branch ends when no further jump is available from the landing
    /// square.
    fn extend_captures(
        &mut self,
        us: Colour,
        square: Square,
        path: &mut Vec<Square>,
        captured: &mut Vec<Square>,
        moves: &mut Vec<Move>,
    ) {
        let mut extended = false;

        for dir in Direction::ALL {
            let Ok(over) = square.add(dir) else { continue };
            let Ok(to) = over.add(dir) else { continue };

            let jumped = match self.on(over) {
                Some(piece) if piece.colour() != us && self.on(to).is_none() => piece,
                _ => continue,
            };

            extended = true;

            // Captured pieces leave the scratch board immediately: a later
            // leg of this branch must not jump them again.
            self.take(over);
            path.push(to);
            captured.push(over);

            self.extend_captures(us, to, path, captured, moves);

            captured.pop();
            path.pop();
            self.put(over, jumped);
        }

        if !extended && path.len() > 1 {
            moves.push(Move::jump(path.clone(), captured.clone()));
        }
    }

    /// Simple one-step moves, only legal when no capture exists anywhere.
    fn generate_steps(&self, us: Colour) -> Vec<Move> {
        let mut moves = Vec::new();
        let forwards = us.forwards();

        for (from, piece) in self.pieces(us) {
            let dirs: &[Direction] = match piece.pt() {
                PieceType::Man => &forwards,
                PieceType::King => &Direction::ALL,
            };

            for &dir in dirs {
                if let Ok(to) = from.add(dir) {
                    if self.on(to).is_none() {
                        moves.push(Move::step(from, to));
                    }
                }
            }
        }

        moves
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
