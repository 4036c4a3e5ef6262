//! The game engine: move validation, outcome detection, scoring.

use crate::action::{Move, MoveResult, RejectReason};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine owning the single authoritative [`GameState`].
///
/// All mutation goes through [`Game::apply_move`] and
/// [`Game::reset_board`]; frontends read snapshots via [`Game::state`]
/// and render from them. Invalid input never fails: it is reported as
/// [`MoveResult::Rejected`] and leaves the state untouched, so the
/// engine is safe to call with stale or duplicate input.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move, scores 0/0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a read-only snapshot of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move for the current player at `index` (0-8, row-major).
    ///
    /// Out-of-range indices, occupied squares, and moves after the round
    /// has ended are no-ops reported as [`MoveResult::Rejected`]. A
    /// successful move either continues the round with the opponent to
    /// move, wins it for the current player (crediting their tally), or
    /// draws it if the board fills without a line.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "move rejected: index outside the board");
            return MoveResult::Rejected(RejectReason::OutOfBounds(index));
        };
        if !self.state.active() {
            debug!(%position, "move rejected: round is over");
            return MoveResult::Rejected(RejectReason::RoundOver);
        }
        if !self.state.board().is_empty(position) {
            debug!(%position, "move rejected: square occupied");
            return MoveResult::Rejected(RejectReason::Occupied(position));
        }

        let player = self.state.current_player();
        self.state.place(Move::new(player, position));

        // Win takes priority over draw; a fresh mark can do at most one.
        let result = if let Some(win) = rules::find_winning_line(self.state.board()) {
            self.state.finish_won(win);
            info!(
                winner = %win.player(),
                line = ?win.indices(),
                wins = self.state.scores().wins(win.player()),
                "round won"
            );
            MoveResult::Won(win)
        } else if rules::is_full(self.state.board()) {
            self.state.finish_draw();
            info!("round drawn");
            MoveResult::Draw
        } else {
            self.state.switch_player();
            MoveResult::Continue(self.state.current_player())
        };

        invariants::assert_invariants(&self.state);
        debug!(board = %self.state.board(), "move applied");

        result
    }

    /// Clears the board for a fresh round: nine empty squares, X to
    /// move, round active. The scoreboard carries over.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) -> &GameState {
        self.state.reset_round();
        info!(
            x_wins = self.state.scores().wins(Player::X),
            o_wins = self.state.scores().wins(Player::O),
            "board reset, scores carried over"
        );
        &self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
