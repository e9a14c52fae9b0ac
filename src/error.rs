//! Error taxonomy for the rules engine.
//!
//! Only one condition is distinguished: coordinates outside the 8x8 board.
//! An illegal move destination is not an error — `Game::select` reports it
//! as a normal [`SelectOutcome::NoEffect`](crate::game::SelectOutcome)
//! control-flow outcome.

use thiserror::Error;

/// Errors produced at the coordinate boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// Row or column outside `0..8`.
    ///
    /// Clients are expected to reject out-of-range input before it reaches
    /// the engine; the engine fails with this rather than indexing out of
    /// range.
    #[error("coordinates ({row}, {col}) are outside the 8x8 board")]
    InvalidCoordinate { row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckersError::InvalidCoordinate { row: 8, col: 3 };
        assert_eq!(
            format!("{}", err),
            "coordinates (8, 3) are outside the 8x8 board"
        );
    }
}
