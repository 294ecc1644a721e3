use crate::core::Square;

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// A single turn's move: the ordered squares the moving piece lands on
/// (`[from, via.., to]`, length >= 2) plus the squares of the pieces it
/// captures along the way, one per jump leg.
///
/// A simple step has a two-square path and no captures; a multi-jump has one
/// intermediate landing square per extra leg. Moves are plain values; applying
/// one to a board is [`Board::apply`](crate::board::Board::apply)'s job.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    path: Vec<Square>,
    captured: Vec<Square>,
}

impl Move {
    /// Creates a simple one-step move
    #[inline]
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            path: vec![from, to],
            captured: Vec::new(),
        }
    }

    /// Creates a capture sequence from its landing path and captured squares
    ///
    /// The path must hold one more square than there are captures.
    pub fn jump(path: Vec<Square>, captured: Vec<Square>) -> Self {
        debug_assert!(path.len() >= 2, "Move path must hold at least two squares");
        debug_assert_eq!(
            path.len(),
            captured.len() + 1,
            "One captured square per jump leg"
        );
        Self { path, captured }
    }

    /// The square the move starts from
    #[inline]
    pub fn from(&self) -> Square {
        self.path[0]
    }

    /// The square the move finally lands on
    #[inline]
    pub fn to(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// The full landing path, start and destination included
    #[inline]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// The squares holding the pieces this move captures, in jump order.
    /// The generator reports them; it never removes them itself.
    #[inline]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Number of legs in the move (1 for a step or single jump)
    #[inline]
    pub fn legs(&self) -> usize {
        self.path.len() - 1
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Move {
    /// Displays the move leg by leg in the surrounding protocol's framing:
    /// `"<from>,<to>;"` per leg ("45,23;23,01;" for a double jump)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for leg in self.path.windows(2) {
            write!(f, "{},{};", leg[0], leg[1])?;
        }
        Ok(())
    }
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
    fn test_step_move() {
        let m = Move::step(sq(6, 1), sq(5, 0));
        assert_eq!(m.from(), sq(6, 1));
        assert_eq!(m.to(), sq(5, 0));
        assert_eq!(m.path(), &[sq(6, 1), sq(5, 0)]);
        assert_eq!(m.captured(), &[]);
        assert_eq!(m.legs(), 1);
        assert!(!m.is_capture());
    }

    #[test]
    fn test_single_jump() {
        let m = Move::jump(vec![sq(4, 3), sq(2, 1)], vec![sq(3, 2)]);
        assert_eq!(m.from(), sq(4, 3));
        assert_eq!(m.to(), sq(2, 1));
        assert_eq!(m.captured(), &[sq(3, 2)]);
        assert_eq!(m.legs(), 1);
        assert!(m.is_capture());
    }

    #[test]
    fn test_multi_jump() {
        let m = Move::jump(
            vec![sq(4, 5), sq(2, 3), sq(0, 1)],
            vec![sq(3, 4), sq(1, 2)],
        );
        assert_eq!(m.from(), sq(4, 5));
        assert_eq!(m.to(), sq(0, 1));
        assert_eq!(m.path(), &[sq(4, 5), sq(2, 3), sq(0, 1)]);
        assert_eq!(m.captured(), &[sq(3, 4), sq(1, 2)]);
        assert_eq!(m.legs(), 2);
        assert!(m.is_capture());
    }

    #[test]
    fn test_move_equality() {
        let m1 = Move::step(sq(6, 1), sq(5, 0));
        let m2 = Move::step(sq(6, 1), sq(5, 0));
        let m3 = Move::step(sq(6, 1), sq(5, 2));
        let j1 = Move::jump(vec![sq(4, 3), sq(2, 1)], vec![sq(3, 2)]);
        let j2 = Move::jump(vec![sq(4, 3), sq(2, 1)], vec![sq(3, 2)]);

        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
        assert_eq!(j1, j2);
        assert_ne!(m1, j1);
    }

    #[test]
    fn test_move_display() {
        let step = Move::step(sq(6, 1), sq(5, 0));
        assert_eq!(step.to_string(), "61,50;");

        let double = Move::jump(
            vec![sq(4, 5), sq(2, 3), sq(0, 1)],
            vec![sq(3, 4), sq(1, 2)],
        );
        assert_eq!(double.to_string(), "45,23;23,01;");
    }
}
