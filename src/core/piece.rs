//! Sides and pieces.
//!
//! ## Color
//!
//! The two sides. Red sits on rows 5-7 at setup and moves first; White sits
//! on rows 0-2. White crowns on row 0, Red on row 7.
//!
//! ## Piece
//!
//! A checker: its color plus a monotonic king flag. Pieces do not know where
//! they stand; the board's grid slot is the single source of truth for
//! position.

use serde::{Deserialize, Serialize};

use super::square::BOARD_SIZE;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first; home rows 5-7.
    Red,
    /// Home rows 0-2.
    White,
}

impl Color {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// The row on which this side's pieces are crowned.
    ///
    /// White crowns on row 0 and Red on row 7 (Red's own back rank -
    /// a deliberate quirk of this rule set, where each side crowns at
    /// its home edge rather than the far one).
    #[must_use]
    pub const fn crown_row(self) -> usize {
        match self {
            Color::Red => BOARD_SIZE - 1,
            Color::White => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A single checker on the board.
///
/// Kings move exactly like regular pieces in this rule set; the flag only
/// records that the piece reached its crown row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Which side owns the piece.
    pub color: Color,
    /// Whether the piece has been crowned. Never resets once set.
    pub king: bool,
}

impl Piece {
    /// Create a regular (non-king) piece.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, king: false }
    }

    /// Create a crowned piece, for setting up custom positions.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    /// Crown the piece. Idempotent; there is no way back.
    pub fn promote(&mut self) {
        self.king = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Red.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Red);
    }

    #[test]
    fn test_crown_rows() {
        assert_eq!(Color::White.crown_row(), 0);
        assert_eq!(Color::Red.crown_row(), 7);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Color::White), "White");
    }

    #[test]
    fn test_promote_is_monotonic() {
        let mut piece = Piece::new(Color::Red);
        assert!(!piece.king);

        piece.promote();
        assert!(piece.king);

        // A second promotion changes nothing
        piece.promote();
        assert!(piece.king);
    }

    #[test]
    fn test_king_constructor() {
        let piece = Piece::king(Color::White);
        assert!(piece.king);
        assert_eq!(piece.color, Color::White);
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::king(Color::Red);
        let json = serde_json::to_string(&piece).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, back);
    }
}
