//! Round status invariant: the status flag agrees with the board.

use super::Invariant;
use crate::rules;
use crate::types::{GameState, RoundStatus, Square};

/// Invariant: the round status is consistent with the board contents.
///
/// A round is in progress only while no line is complete and an empty
/// square remains; a recorded win names a line the board actually shows;
/// a draw means a full board with no line.
pub struct RoundStatusInvariant;

impl Invariant<GameState> for RoundStatusInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            RoundStatus::InProgress => {
                rules::find_winning_line(board).is_none() && !rules::is_full(board)
            }
            RoundStatus::Won(win) => win
                .cells()
                .iter()
                .all(|&pos| board.get(pos) == Square::Occupied(win.player())),
            RoundStatus::Draw => {
                rules::is_full(board) && rules::find_winning_line(board).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Round status agrees with the board contents"
    }
}
