//! Move records and the result of applying one.

use crate::position::Position;
use crate::rules::Win;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
///
/// Moves are recorded in the round history, so a round can be replayed
/// and checked against the board it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
///
/// Not an error: rejected input is expected in normal play (a stale or
/// repeated press) and leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The index does not name a square on the board.
    #[display("index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The round is already over.
    #[display("the round is already over")]
    RoundOver,
}

/// Outcome of a single [`crate::Game::apply_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was ignored; nothing changed.
    Rejected(RejectReason),
    /// The round continues; the given player is now to move.
    Continue(Player),
    /// The move completed a line and ended the round.
    Won(Win),
    /// The move filled the last square without completing a line.
    Draw,
}
