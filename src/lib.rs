//! # checkers-core
//!
//! An 8x8 checkers rules engine for building graphical clients.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: no rendering, input handling, timing, or persistence.
//!    A client translates pixels to (row, col), feeds them to
//!    [`Game::select`], and reads [`Game::render_state`] back to draw.
//!
//! 2. **Validated boundary**: raw coordinates are checked once, at
//!    [`core::Square`] construction; everything past that point indexes the
//!    grid without bounds checks.
//!
//! 3. **State machine over recursion**: a click is resolved in one explicit
//!    two-phase pass (try the move, else try a selection) with a tagged
//!    [`SelectOutcome`], never by re-entering the handler.
//!
//! ## Rule set
//!
//! This engine implements the relaxed rules of the game it was built for,
//! not tournament draughts: captures are single jumps, never chained and
//! never mandatory; kings move exactly like regular pieces; each side
//! crowns on its home edge (White row 0, Red row 7); a game ends only when
//! one side runs out of pieces.
//!
//! ## Modules
//!
//! - `core`: squares, diagonals, colors, pieces
//! - `board`: grid state, move generation, move application
//! - `game`: turn/selection state machine, win detection, history
//! - `error`: the coordinate-boundary error

pub mod board;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Color, Diagonal, Piece, Square, BOARD_SIZE};

pub use crate::board::{Board, CaptureList, MoveMap};

pub use crate::error::CheckersError;

pub use crate::game::{Game, MoveRecord, RenderState, SelectOutcome};
