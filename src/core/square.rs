//! Board coordinates and move directions.
//!
//! ## Square
//!
//! A validated (row, col) pair on the 8x8 board. A `Square` can only be
//! constructed in-bounds, so everything downstream of the coordinate
//! boundary indexes the grid without further checks.
//!
//! ## Diagonal
//!
//! The four diagonal directions a piece can move in. In this rule set every
//! piece, king or not, considers all four.

use serde::{Deserialize, Serialize};

use crate::error::CheckersError;

/// Board side length. The board is always 8x8.
pub const BOARD_SIZE: usize = 8;

/// A position on the 8x8 board.
///
/// Rows and columns are 0-based, row 0 at the top (White's home rows).
/// Construction is validating: use [`Square::new`] with known-good values or
/// [`Square::from_coords`] at the raw-integer boundary.
///
/// ## Example
///
/// ```
/// use checkers_core::core::Square;
///
/// let sq = Square::new(2, 1).unwrap();
/// assert_eq!(sq.row(), 2);
/// assert_eq!(sq.col(), 1);
/// assert!(sq.is_dark());
/// assert!(Square::new(8, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, returning `None` if either coordinate is out of range.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a square from raw client coordinates.
    ///
    /// This is the validation point for pixel-derived input; out-of-range
    /// values fail with [`CheckersError::InvalidCoordinate`].
    pub fn from_coords(row: usize, col: usize) -> Result<Self, CheckersError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CheckersError::InvalidCoordinate { row, col })
        }
    }

    /// Get the row (0..8).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Get the column (0..8).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row-major index into a 64-cell grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Check whether this is a dark (playable) square.
    ///
    /// Pieces only ever occupy dark squares, where `(row + col)` is odd.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The adjacent square one step along a diagonal, if on-board.
    #[must_use]
    pub fn step(self, diagonal: Diagonal) -> Option<Self> {
        self.offset(diagonal.delta(), 1)
    }

    /// The square two steps along a diagonal (a jump landing), if on-board.
    #[must_use]
    pub fn jump(self, diagonal: Diagonal) -> Option<Self> {
        self.offset(diagonal.delta(), 2)
    }

    fn offset(self, (dr, dc): (i8, i8), scale: i8) -> Option<Self> {
        let row = self.row as i8 + dr * scale;
        let col = self.col as i8 + dc * scale;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Self { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four diagonal move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Diagonal {
    /// All four diagonals, in move-generation order.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::UpLeft,
        Diagonal::UpRight,
        Diagonal::DownLeft,
        Diagonal::DownRight,
    ];

    /// The (row, col) delta for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Diagonal::UpLeft => (-1, -1),
            Diagonal::UpRight => (-1, 1),
            Diagonal::DownLeft => (1, -1),
            Diagonal::DownRight => (1, 1),
        }
    }
}
