//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it only changes
/// through a full board reset. Verified by replaying the round history
/// and comparing against the actual board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position()) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position(), Square::Occupied(mov.player()));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
