//! noughts engine - two-player tic-tac-toe rules with cross-round scoring.
//!
//! The engine owns all game state and exposes three operations to a
//! presentation layer: apply a move, reset the board, and query the
//! current state. Control flow is strictly request/response - the caller
//! issues a command, the engine mutates state synchronously and returns
//! a result describing what changed.
//!
//! Invalid input (out-of-range index, occupied square, move after the
//! round ended) is never an error: it degrades to a no-op reported as
//! [`MoveResult::Rejected`], so the engine tolerates stale or duplicate
//! input without corrupting state.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Game, MoveResult, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.apply_move(4), MoveResult::Continue(Player::O));
//!
//! // Same square again: ignored, nothing changed.
//! assert!(matches!(game.apply_move(4), MoveResult::Rejected(_)));
//! assert_eq!(game.state().current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - engine
pub use game::Game;

// Crate-level exports - moves and results
pub use action::{Move, MoveResult, RejectReason};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameState, Player, RoundStatus, Scoreboard, Square};

// Crate-level exports - rule checks
pub use rules::{Win, find_winning_line, is_full};

// Crate-level exports - invariants
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, RoundStatusInvariant, assert_invariants,
};
