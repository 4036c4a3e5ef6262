//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: moves alternate strictly between the players.
///
/// The round history must read X, O, X, O, ... and, while the round is
/// active, the current player must be the one the parity predicts.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn expected_player(move_count: usize) -> Player {
        if move_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        for (i, mov) in state.history().iter().enumerate() {
            if mov.player() != Self::expected_player(i) {
                return false;
            }
        }

        if state.active() {
            return state.current_player() == Self::expected_player(state.history().len());
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate strictly, starting with X"
    }
}
