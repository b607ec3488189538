//! Four-cell window classification.

use crate::board::{Board, COLS, ROWS};
use crate::eval::weights::{
    W_AI_1E3, W_AI_2E2, W_AI_3E1, W_AI_4, W_HUMAN_1E3, W_HUMAN_2E2, W_HUMAN_3E1, W_HUMAN_4,
};
use crate::player::Cell;
use crate::win::DIRECTIONS;

/// Cells per scoring window.
pub const WINDOW_LEN: usize = 4;

/// Score one window from its piece counts.
///
/// A window holding pieces of both players is blocked and scores 0.
pub fn score_window(cells: [Cell; WINDOW_LEN]) -> i32 {
    let mut computer = 0;
    let mut human = 0;
    for cell in cells {
        match cell {
            Cell::Computer => computer += 1,
            Cell::Human => human += 1,
            Cell::Empty => {}
        }
    }
    let empty = WINDOW_LEN - computer - human;

    match (computer, human, empty) {
        (c, h, _) if c > 0 && h > 0 => 0,
        (4, _, _) => W_AI_4,
        (_, 4, _) => W_HUMAN_4,
        (3, _, 1) => W_AI_3E1,
        (_, 3, 1) => W_HUMAN_3E1,
        (2, _, 2) => W_AI_2E2,
        (_, 2, 2) => W_HUMAN_2E2,
        (1, _, 3) => W_AI_1E3,
        (_, 1, 3) => W_HUMAN_1E3,
        _ => 0,
    }
}

/// Sum of [`score_window`] over every in-bounds window in all four directions.
///
/// Windows overlap and are not deduplicated.
pub fn pattern_score(board: &Board) -> i32 {
    let grid = board.grid();
    let last = WINDOW_LEN as isize - 1;
    let mut score = 0;

    for (dr, dc) in DIRECTIONS {
        for row in 0..ROWS {
            for col in 0..COLS {
                let end_row = row as isize + dr * last;
                let end_col = col as isize + dc * last;
                if end_row < 0 || end_row >= ROWS as isize || end_col >= COLS as isize {
                    continue;
                }

                let mut cells = [Cell::Empty; WINDOW_LEN];
                for (i, cell) in cells.iter_mut().enumerate() {
                    let r = (row as isize + dr * i as isize) as usize;
                    let c = (col as isize + dc * i as isize) as usize;
                    *cell = grid[r][c];
                }
                score += score_window(cells);
            }
        }
    }

    score
}

/// Number of windows [`pattern_score`] visits.
pub const fn window_count() -> usize {
    let span = WINDOW_LEN - 1;
    let horizontal = ROWS * (COLS - span);
    let vertical = (ROWS - span) * COLS;
    let diagonal = (ROWS - span) * (COLS - span);
    horizontal + vertical + 2 * diagonal
}

#[cfg(test)]
mod tests {
    use super::{WINDOW_LEN, score_window, window_count};
    use crate::eval::weights::*;
    use crate::player::Cell::{self, Computer as C, Empty as E, Human as H};

    #[test]
    fn blocked_window_scores_zero() {
        assert_eq!(score_window([C, H, E, E]), 0);
        assert_eq!(score_window([C, C, C, H]), 0);
        assert_eq!(score_window([H, H, H, C]), 0);
    }

    #[test]
    fn full_windows() {
        assert_eq!(score_window([C; WINDOW_LEN]), W_AI_4);
        assert_eq!(score_window([H; WINDOW_LEN]), W_HUMAN_4);
    }

    #[test]
    fn partial_windows_ignore_order() {
        assert_eq!(score_window([C, E, C, C]), W_AI_3E1);
        assert_eq!(score_window([E, H, H, H]), W_HUMAN_3E1);
        assert_eq!(score_window([C, E, E, C]), W_AI_2E2);
        assert_eq!(score_window([H, H, E, E]), W_HUMAN_2E2);
        assert_eq!(score_window([E, E, C, E]), W_AI_1E3);
        assert_eq!(score_window([E, E, E, H]), W_HUMAN_1E3);
    }

    #[test]
    fn empty_window_scores_zero() {
        let empty: [Cell; WINDOW_LEN] = [E; WINDOW_LEN];
        assert_eq!(score_window(empty), 0);
    }

    #[test]
    fn window_count_on_ten_by_ten() {
        // 70 horizontal + 70 vertical + 49 per diagonal direction
        assert_eq!(window_count(), 238);
    }
}
