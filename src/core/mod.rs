//! Core value types: squares, move directions, sides, pieces.
//!
//! These are the building blocks the board and the turn machine are made
//! of. Everything here is `Copy` and cheap to pass around.

pub mod piece;
pub mod square;

pub use piece::{Color, Piece};
pub use square::{Diagonal, Square, BOARD_SIZE};
