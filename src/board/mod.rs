//! Board state and legal-move generation.
//!
//! ## Board
//!
//! An 8x8 grid of `Option<Piece>`, row-major. The board owns every piece on
//! it; positions are grid slots, not piece attributes. State changes go
//! through [`Board::apply_move`] and [`Board::remove`] only (plus
//! [`Board::place`] during position setup) - clients never poke cells.
//!
//! ## Move generation
//!
//! [`Board::valid_moves`] is a pure query: for each of the four diagonals it
//! offers the one-step neighbor when empty, and the two-step landing when the
//! neighbor holds an opposing piece and the landing is empty. Single jumps
//! only; captures are never chained or mandatory, and kings move exactly
//! like regular pieces.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Color, Diagonal, Piece, Square, BOARD_SIZE};

/// Squares captured by one move, in jump order.
///
/// Single-jump rules mean at most one entry today; the sequence type keeps
/// the API stable if multi-jump chains are ever adopted.
pub type CaptureList = SmallVec<[Square; 1]>;

/// Legal destinations for one piece: destination square to captured squares.
pub type MoveMap = FxHashMap<Square, CaptureList>;

/// The 8x8 playing board.
///
/// ## Example
///
/// ```
/// use checkers_core::board::Board;
/// use checkers_core::core::{Color, Square};
///
/// let board = Board::new();
/// let red_man = board.get(Square::new(5, 0).unwrap()).unwrap();
/// assert_eq!(red_man.color, Color::Red);
/// assert_eq!(board.count(Color::Red), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major, always exactly 64 entries.
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create a board in the initial position.
    ///
    /// On every dark square: White on rows 0-2, Red on rows 5-7, rows 3-4
    /// empty. Light squares are always empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for square in Square::all().filter(|s| s.is_dark()) {
            if square.row() < 3 {
                board.place(square, Piece::new(Color::White));
            } else if square.row() > 4 {
                board.place(square, Piece::new(Color::Red));
            }
        }
        board
    }

    /// Create a board with no pieces, for setting up custom positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Place a piece on a square, replacing any occupant.
    ///
    /// Position-setup operation; normal play mutates only via
    /// [`Board::apply_move`] and [`Board::remove`].
    pub fn place(&mut self, square: Square, piece: Piece) {
        debug_assert!(square.is_dark(), "pieces live on dark squares only");
        self.cells[square.index()] = Some(piece);
    }

    /// Get the occupant of a square, if any.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Compute the legal destinations for the piece on `from`.
    ///
    /// Returns a map from destination square to the squares captured by
    /// moving there (empty for a simple step, the jumped square for a
    /// capture). Empty map if `from` is empty. Pure query; the board is not
    /// touched.
    #[must_use]
    pub fn valid_moves(&self, from: Square) -> MoveMap {
        let mut moves = MoveMap::default();
        let Some(piece) = self.get(from) else {
            return moves;
        };

        for diagonal in Diagonal::ALL {
            let Some(step) = from.step(diagonal) else {
                continue;
            };
            match self.get(step) {
                // Adjacent empty square: simple move, nothing captured.
                None => {
                    moves.insert(step, CaptureList::new());
                }
                // Adjacent opponent: a jump if the landing square exists
                // and is empty.
                Some(neighbor) if neighbor.color != piece.color => {
                    if let Some(landing) = from.jump(diagonal) {
                        if self.get(landing).is_none() {
                            moves.insert(landing, smallvec![step]);
                        }
                    }
                }
                // Adjacent friendly piece blocks the diagonal.
                Some(_) => {}
            }
        }

        moves
    }

    /// Relocate the piece on `from` to `to`, crowning it if `to` is on its
    /// color's crown row.
    ///
    /// Legality is the caller's contract (the turn machine only passes
    /// destinations from [`Board::valid_moves`]); captures are removed
    /// separately via [`Board::remove`]. A call with an empty `from` is a
    /// no-op.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let Some(mut piece) = self.cells[from.index()].take() else {
            debug_assert!(false, "apply_move called with empty source {from}");
            return;
        };

        if to.row() == piece.color.crown_row() && !piece.king {
            piece.promote();
            debug!("{} piece crowned at {}", piece.color, to);
        }
        self.cells[to.index()] = Some(piece);
    }

    /// Vacate every listed square. Already-empty squares are skipped.
    pub fn remove(&mut self, squares: &[Square]) {
        for &square in squares {
            self.cells[square.index()] = None;
        }
    }

    /// Count the pieces of one color still on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Iterate over every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
