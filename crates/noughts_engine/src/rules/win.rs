//! Winning-line detection.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines that can decide a round, in check order: rows top to
/// bottom, columns left to right, then the two diagonals. A move can
/// complete more than one line at once; the first match in this order is
/// the one reported.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    cells: [Position; 3],
}

impl Win {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three positions of the winning line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Board indices of the winning line, for callers that address
    /// squares by index.
    pub fn indices(&self) -> [usize; 3] {
        [
            self.cells[0].to_index(),
            self.cells[1].to_index(),
            self.cells[2].to_index(),
        ]
    }
}

/// Scans all eight lines and reports the first completed one.
///
/// Returns `None` if no player has three in a row.
#[instrument]
pub fn find_winning_line(board: &Board) -> Option<Win> {
    for cells in LINES {
        let [a, b, c] = cells;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Win { player, cells });
            }
        }
    }

    None
}
