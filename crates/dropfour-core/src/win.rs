//! Win detection from a single placement point.

use tracing::debug;

use crate::board::{Board, CONNECT_N};
use crate::player::Player;
use crate::pos::Pos;

/// Line directions as `(row step, col step)`, in the order they are checked:
/// horizontal, vertical, diagonal down-right, diagonal up-right.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl Board {
    /// Look for a line of [`CONNECT_N`] through the piece at `(row, col)`.
    ///
    /// For each direction the contiguous run of same-player cells through the
    /// origin is ordered from the far backward end to the far forward end.
    /// The first direction whose run reaches `CONNECT_N` wins, and only the
    /// first `CONNECT_N` cells of that run are returned.
    pub fn check_win_from(&self, row: usize, col: usize) -> Option<[Pos; CONNECT_N]> {
        let origin = Pos::new(row, col);
        let player = self.cell_at(origin).player()?;

        for (dr, dc) in DIRECTIONS {
            let forward = self.run_length(origin, player, dr, dc);
            let backward = self.run_length(origin, player, -dr, -dc);
            if 1 + forward + backward < CONNECT_N {
                continue;
            }

            // Start from the farthest backward cell and walk forward.
            let back = backward as isize;
            let mut cells = [origin; CONNECT_N];
            for (i, cell) in cells.iter_mut().enumerate() {
                let step = i as isize - back;
                if let Some(pos) = origin.offset(dr * step, dc * step) {
                    *cell = pos;
                }
            }
            return Some(cells);
        }

        None
    }

    /// Re-derive a win from the last placement and cache its cells.
    ///
    /// Returns `None` when no move has been made or the last move did not win.
    pub fn has_winner(&mut self) -> Option<Player> {
        let last = self.last_move()?;
        let cells = self.check_win_from(last.row, last.col)?;
        let player = self.cell_at(last).player()?;
        debug!(winner = %player, line = ?cells, "winning line detected");
        self.set_winning_cells(cells);
        Some(player)
    }

    /// Count contiguous `player` cells from `origin` (exclusive) along `(dr, dc)`.
    fn run_length(&self, origin: Pos, player: Player, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let mut pos = origin;
        while let Some(next) = pos.offset(dr, dc) {
            if self.cell_at(next).player() != Some(player) {
                break;
            }
            count += 1;
            pos = next;
        }
        count
    }
}
