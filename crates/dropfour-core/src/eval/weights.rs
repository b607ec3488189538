//! Tunable evaluation constants.
//!
//! Window weights are from the computer's point of view: positive favours the
//! computer, negative favours the human. Human threats weigh slightly more
//! than the computer's own, which biases play toward blocking.

/// Four computer pieces in one window.
pub const W_AI_4: i32 = 10_000;
/// Four human pieces in one window.
pub const W_HUMAN_4: i32 = -10_000;
/// Three computer pieces and one empty cell.
pub const W_AI_3E1: i32 = 60;
/// Three human pieces and one empty cell.
pub const W_HUMAN_3E1: i32 = -80;
/// Two computer pieces and two empty cells.
pub const W_AI_2E2: i32 = 8;
/// Two human pieces and two empty cells.
pub const W_HUMAN_2E2: i32 = -10;
/// One computer piece and three empty cells.
pub const W_AI_1E3: i32 = 1;
/// One human piece and three empty cells.
pub const W_HUMAN_1E3: i32 = -1;

/// Column bonus at the centre; falls off by one per column of distance.
pub const COL_BONUS_BASE: i32 = 6;
/// Row bonus at the centre; falls off by `1 / ROW_BONUS_DIV` per row.
pub const ROW_BONUS_BASE: i32 = 3;
/// Divisor applied to a piece's row distance from the centre.
pub const ROW_BONUS_DIV: i32 = 2;
