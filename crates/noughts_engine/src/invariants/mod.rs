//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are testable independently and serve as documentation of the
//! guarantees the engine maintains.

use crate::types::GameState;

pub mod alternating_turn;
pub mod monotonic_board;
pub mod round_status;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use round_status::RoundStatusInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with the list
    /// of violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    RoundStatusInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(state)
    {
        panic!("engine invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(EngineInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        for index in [0, 4, 2] {
            game.apply_move(index);
        }
        assert!(EngineInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_round_end_and_reset() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert!(EngineInvariants::check_all(game.state()).is_ok());

        game.reset_board();
        assert!(EngineInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(game.state()).is_ok());
    }
}
