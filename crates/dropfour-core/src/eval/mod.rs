//! Static position evaluation.
//!
//! Scores are computer-positive: the computer wants them high, the human low.
//! The total is the [`positional`] centre bonus of every piece plus the
//! [`window`] pattern score of every four-cell line segment.

pub mod positional;
pub mod weights;
pub mod window;

use crate::board::{Board, COLS, ROWS};
use crate::player::Player;

use self::positional::POSITION_BONUS;
use self::window::pattern_score;

impl Board {
    /// Heuristic score of the position, computer-positive.
    ///
    /// Pure function of the grid contents; move history is never read.
    pub fn evaluate(&self) -> i32 {
        positional_score(self) + pattern_score(self)
    }
}

/// Signed sum of [`POSITION_BONUS`] over every occupied cell.
pub fn positional_score(board: &Board) -> i32 {
    let mut score = 0;
    for row in 0..ROWS {
        for col in 0..COLS {
            if let Some(player) = board.cell(row, col).player() {
                score += player.sign() * POSITION_BONUS[row][col];
            }
        }
    }
    score
}

/// Evaluate `board` from `player`'s point of view.
#[inline]
pub fn evaluate_for(board: &Board, player: Player) -> i32 {
    board.evaluate() * player.sign()
}
