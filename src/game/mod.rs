//! Turn and selection state machine.
//!
//! ## Game
//!
//! Owns the board, whose turn it is, and the current selection with its
//! cached legal moves. Clients drive it with one operation per input event:
//! [`Game::select`] with the clicked square, then read
//! [`Game::render_state`] to redraw.
//!
//! ## The select machine
//!
//! `select` runs two phases in a single call:
//!
//! 1. If a piece is selected and the clicked square is one of its cached
//!    destinations, the move is applied (captures removed, turn toggled)
//!    and the call yields [`SelectOutcome::Moved`]. Any other click drops
//!    the selection and falls through.
//! 2. If the clicked square holds a piece of the side to move, it becomes
//!    the new selection and its legal moves are cached:
//!    [`SelectOutcome::Selected`].
//!
//! The fall-through gives single-click fluidity: clicking one of your own
//! pieces while another is selected re-selects in the same call rather than
//! requiring a deselect first. A click that is neither a destination nor a
//! selectable piece is [`SelectOutcome::NoEffect`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::{Board, CaptureList, MoveMap};
use crate::core::{Color, Square};
use crate::error::CheckersError;

/// What a single [`Game::select`] call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// A move was applied and the turn passed to the other side.
    Moved {
        from: Square,
        to: Square,
        /// Squares whose occupants were captured, in jump order.
        captured: CaptureList,
    },
    /// The square's piece became the current selection.
    Selected(Square),
    /// Neither a move nor a selection happened.
    NoEffect,
}

impl SelectOutcome {
    /// Whether the call produced a move or a new selection.
    #[must_use]
    pub fn had_effect(&self) -> bool {
        !matches!(self, SelectOutcome::NoEffect)
    }
}

/// One applied move, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub color: Color,
    pub from: Square,
    pub to: Square,
    /// Squares captured by this move.
    pub captured: CaptureList,
    /// 1-based position in the game's move sequence.
    pub move_number: u32,
}

/// Read-only snapshot handed to the presentation layer for drawing.
#[derive(Clone, Debug, Serialize)]
pub struct RenderState<'a> {
    /// The side to move.
    pub turn: Color,
    /// The full board.
    pub board: &'a Board,
    /// The currently selected square, if any.
    pub selected: Option<Square>,
    /// Legal destinations for the selection, sorted row-major.
    pub targets: Vec<Square>,
}

/// The current selection and its legal-move cache.
///
/// The cache lives inside the selection, so it cannot outlive it: dropping
/// the selection (on any turn change or failed move) drops the cache too.
#[derive(Clone, Debug)]
struct Selection {
    square: Square,
    moves: MoveMap,
}

/// A checkers game session.
///
/// ## Example
///
/// ```
/// use checkers_core::game::{Game, SelectOutcome};
///
/// let mut game = Game::new();
/// // Red moves first; pick the man on (5, 0) and step it to (4, 1).
/// assert_eq!(game.select(5, 0).unwrap(), SelectOutcome::Selected(
///     checkers_core::core::Square::new(5, 0).unwrap(),
/// ));
/// assert!(matches!(game.select(4, 1).unwrap(), SelectOutcome::Moved { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a game from the initial position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::Red)
    }

    /// Start from a custom position with the given side to move.
    #[must_use]
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
            history: Vec::new(),
        }
    }

    /// Handle a click on raw client coordinates.
    ///
    /// Validates bounds, then runs the two-phase machine described in the
    /// module docs. An illegal destination is not an error; it reports
    /// [`SelectOutcome::NoEffect`] (or a fresh selection, if the square
    /// holds a piece of the side to move).
    pub fn select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, CheckersError> {
        let square = Square::from_coords(row, col)?;
        Ok(self.select_square(square))
    }

    /// [`Game::select`] for a pre-validated square.
    pub fn select_square(&mut self, square: Square) -> SelectOutcome {
        // Phase 1: try the square as a destination. Taking the selection
        // means a failed attempt has already dropped it when phase 2 runs.
        if let Some(selection) = self.selection.take() {
            if let Some(captured) = selection.moves.get(&square) {
                let captured = captured.clone();
                return self.apply_move(selection.square, square, captured);
            }
            trace!("selection {} dropped on click at {}", selection.square, square);
        }

        // Phase 2: try the square as a new selection.
        match self.board.get(square) {
            Some(piece) if piece.color == self.turn => {
                let moves = self.board.valid_moves(square);
                trace!(
                    "{} selected {} with {} legal destinations",
                    self.turn,
                    square,
                    moves.len()
                );
                self.selection = Some(Selection { square, moves });
                SelectOutcome::Selected(square)
            }
            _ => SelectOutcome::NoEffect,
        }
    }

    fn apply_move(&mut self, from: Square, to: Square, captured: CaptureList) -> SelectOutcome {
        self.board.apply_move(from, to);
        if !captured.is_empty() {
            self.board.remove(&captured);
        }

        debug!(
            "{} moved {} -> {}, {} captured",
            self.turn,
            from,
            to,
            captured.len()
        );
        self.history.push(MoveRecord {
            color: self.turn,
            from,
            to,
            captured: captured.clone(),
            move_number: self.history.len() as u32 + 1,
        });

        self.change_turn();
        SelectOutcome::Moved { from, to, captured }
    }

    /// Pass the turn to the other side, dropping any selection and its
    /// legal-move cache.
    fn change_turn(&mut self) {
        self.selection = None;
        self.turn = self.turn.opponent();
    }

    /// The winning side, if one side has no pieces left.
    ///
    /// Only piece extinction ends a game; a side with pieces but no legal
    /// moves is not a terminal state in this rule set. Red is checked
    /// first, so a board empty of both colors reports White.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if self.board.count(Color::Red) == 0 {
            Some(Color::White)
        } else if self.board.count(Color::White) == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Snapshot for the presentation layer.
    ///
    /// Destinations are sorted row-major so redraws are deterministic.
    #[must_use]
    pub fn render_state(&self) -> RenderState<'_> {
        let (selected, mut targets) = match &self.selection {
            Some(selection) => (
                Some(selection.square),
                selection.moves.keys().copied().collect(),
            ),
            None => (None, Vec::new()),
        };
        targets.sort_unstable();

        RenderState {
            turn: self.turn,
            board: &self.board,
            selected,
            targets,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The currently selected square, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selection.as_ref().map(|s| s.square)
    }

    /// Every move applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
