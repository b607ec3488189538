//! Centre-preference table.
//!
//! Each cell is worth `floor(column_bonus + row_bonus)` where
//!
//! - `column_bonus = COL_BONUS_BASE - |col - (COLS - 1) / 2|`
//! - `row_bonus = ROW_BONUS_BASE - |row - (ROWS - 1) / 2| / ROW_BONUS_DIV`
//!
//! Both centres may fall between two cells, so the sum is computed exactly in
//! units of `1 / (2 * ROW_BONUS_DIV)` and floored once.

use crate::board::{COLS, ROWS};
use crate::eval::weights::{COL_BONUS_BASE, ROW_BONUS_BASE, ROW_BONUS_DIV};

/// Positional value of a piece, indexed `[row][col]`.
pub const POSITION_BONUS: [[i32; COLS]; ROWS] = build_table();

const fn build_table() -> [[i32; COLS]; ROWS] {
    let denom = 2 * ROW_BONUS_DIV;
    let mut table = [[0; COLS]; ROWS];
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLS {
            // Twice the distance from centre keeps half-cell centres integral.
            let col_dist2 = (2 * col as i32 - (COLS as i32 - 1)).abs();
            let row_dist2 = (2 * row as i32 - (ROWS as i32 - 1)).abs();
            let numer = denom * COL_BONUS_BASE - ROW_BONUS_DIV * col_dist2
                + denom * ROW_BONUS_BASE
                - row_dist2;
            table[row][col] = numer.div_euclid(denom);
            col += 1;
        }
        row += 1;
    }
    table
}
