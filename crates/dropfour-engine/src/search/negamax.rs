//! Negamax alpha-beta search over a mutable board.

use dropfour_core::eval::evaluate_for;
use dropfour_core::{Board, COLS, ColumnList, Player, ROWS};

use crate::search::control::SearchControl;
use crate::search::ordering::order_moves;

/// Score for completing a line at the root. A win found `ply` moves deep
/// scores `WIN_SCORE - ply`, so faster wins rank higher.
pub const WIN_SCORE: i32 = 10_000_000;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 1_000_000_000;

/// Maximum search depth (in plies): one per cell, plus the root.
pub const MAX_PLY: usize = ROWS * COLS + 1;

/// The deadline passed mid-search. The partial result is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search deadline exceeded")]
pub struct Aborted;

/// Negamax alpha-beta search.
///
/// Returns the best score for `player`, the side to move. The best line from
/// this node is collected into `ctx.pv` at `ply`.
///
/// Every candidate is played through a [`Placement`](dropfour_core::Placement)
/// guard, so the board is restored on every exit path, including
/// [`Aborted`] propagating up from a deeper frame.
pub(super) fn negamax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    player: Player,
    ply: usize,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, Aborted> {
    if ctx.control.should_stop() {
        return Err(Aborted);
    }

    ctx.nodes += 1;
    ctx.pv.clear_ply(ply);

    if depth == 0 || board.is_full() {
        return Ok(evaluate_for(board, player));
    }

    let moves = order_moves(&board.valid_moves(), &ctx.hint);
    let mut best_score = -INF;

    for &col in &moves {
        let Ok(mut placed) = board.place(col, player) else {
            debug_assert!(false, "valid move {col} rejected by the board");
            continue;
        };

        let score = if placed.is_win() {
            ctx.pv.clear_ply(ply + 1);
            WIN_SCORE - ply as i32
        } else {
            -negamax(&mut placed, depth - 1, -beta, -alpha, !player, ply + 1, ctx)?
        };
        drop(placed);

        if score > best_score {
            best_score = score;
            ctx.pv.update(ply, col);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    Ok(best_score)
}

/// Triangular PV table for collecting principal variation lines.
///
/// Row `ply` holds the best line found from that ply onward: its first entry
/// is the best column and the rest is copied from row `ply + 1`.
pub struct PvTable {
    moves: Vec<[usize; MAX_PLY]>,
    len: [usize; MAX_PLY],
}

impl PvTable {
    /// Create an empty PV table.
    pub fn new() -> Self {
        Self {
            moves: vec![[0; MAX_PLY]; MAX_PLY],
            len: [0; MAX_PLY],
        }
    }

    /// Clear the PV line at `ply` (called at the top of each node).
    pub fn clear_ply(&mut self, ply: usize) {
        if ply < MAX_PLY {
            self.len[ply] = 0;
        }
    }

    /// Update the PV at `ply`: set `col` as the best move and copy
    /// the continuation from `ply + 1`.
    ///
    /// After this call, `self.moves[ply]` = `[col, pv[ply+1]...]`.
    pub fn update(&mut self, ply: usize, col: usize) {
        if ply >= MAX_PLY {
            return;
        }

        self.moves[ply][0] = col;

        let child_ply = ply + 1;
        if child_ply < MAX_PLY {
            let copy_len = self.len[child_ply].min(MAX_PLY - 1 - ply);
            let (top, bottom) = self.moves.split_at_mut(child_ply);
            top[ply][1..1 + copy_len].copy_from_slice(&bottom[0][..copy_len]);
            self.len[ply] = 1 + copy_len;
        } else {
            self.len[ply] = 1;
        }
    }

    /// The principal variation from the root.
    pub fn root_pv(&self) -> &[usize] {
        &self.moves[0][..self.len[0]]
    }
}

impl Default for PvTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Search state threaded through negamax calls. One per `choose_move` call.
pub(super) struct SearchContext<'a> {
    /// Nodes visited across all iterations.
    pub nodes: u64,
    /// Principal variation table.
    pub pv: PvTable,
    /// Deadline.
    pub control: &'a SearchControl,
    /// Columns tried first at every node.
    pub hint: ColumnList,
}

impl<'a> SearchContext<'a> {
    pub fn new(control: &'a SearchControl, hint: ColumnList) -> Self {
        Self {
            nodes: 0,
            pv: PvTable::new(),
            control,
            hint,
        }
    }
}
