//! Iterative-deepening search and its supporting pieces.

pub mod control;
pub mod negamax;
pub mod ordering;

use std::time::Duration;

use dropfour_core::{Board, Player};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use control::SearchControl;
use negamax::{Aborted, INF, SearchContext, negamax};
use ordering::hint_from_pv;

/// Summary of one `choose_move` call, or of one completed iteration when
/// handed to a progress callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Deepest iteration that completed.
    pub depth: u8,
    /// Nodes visited across all iterations, including an aborted one.
    pub nodes: u64,
    /// `nodes` divided by elapsed seconds.
    pub nodes_per_second: f64,
    /// Wall time since the search started.
    pub elapsed: Duration,
    /// Score of the best move, from the mover's point of view.
    pub score: i32,
    /// Principal variation, starting with the chosen column.
    pub pv: Vec<usize>,
}

impl SearchStats {
    /// Elapsed wall time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Iterative-deepening alpha-beta searcher.
///
/// Holds only its configuration. Every call builds a fresh search context, so
/// nothing carries over from one move to the next.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick a column for `player` within the configured time budget.
    ///
    /// The board is searched in place and handed back exactly as it came in.
    /// On a full board this returns column `0` with empty stats.
    pub fn choose_move(&self, board: &mut Board, player: Player) -> (usize, SearchStats) {
        self.choose_move_with(board, player, |_| {})
    }

    /// Same as [`choose_move`](Self::choose_move), calling `on_iter` after
    /// every completed iteration with that iteration's stats.
    pub fn choose_move_with<F>(
        &self,
        board: &mut Board,
        player: Player,
        mut on_iter: F,
    ) -> (usize, SearchStats)
    where
        F: FnMut(&SearchStats),
    {
        let root_moves = board.valid_moves();
        let Some(&first_move) = root_moves.first() else {
            warn!("no valid moves, board is full");
            return (0, SearchStats::default());
        };

        let control = SearchControl::new_timed(self.config.time_limit);
        let mut ctx = SearchContext::new(&control, root_moves);

        // Track completed iteration results (for abort-safety)
        let mut completed_move = first_move;
        let mut completed_score = -INF;
        let mut completed_depth: u8 = 0;
        let mut completed_pv: Vec<usize> = Vec::new();

        for depth in 1..=self.config.max_depth {
            let score = match negamax(board, depth, -INF, INF, player, 0, &mut ctx) {
                Ok(score) => score,
                Err(Aborted) => {
                    debug!(depth, nodes = ctx.nodes, "deadline hit, iteration discarded");
                    break;
                }
            };

            let pv = ctx.pv.root_pv();
            if let Some(&best) = pv.first() {
                completed_move = best;
            }
            completed_score = score;
            completed_depth = depth;
            completed_pv = pv.to_vec();

            debug!(depth, score, nodes = ctx.nodes, pv = ?completed_pv, "iteration complete");
            on_iter(&stats(
                depth,
                score,
                ctx.nodes,
                control.elapsed(),
                completed_pv.clone(),
            ));

            if self.config.reuse_pv_ordering {
                ctx.hint = hint_from_pv(&completed_pv, &root_moves);
            }
        }

        if completed_pv.is_empty() {
            completed_pv.push(completed_move);
        }

        let result = stats(
            completed_depth,
            completed_score,
            ctx.nodes,
            control.elapsed(),
            completed_pv,
        );
        info!(
            column = completed_move,
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            nps = result.nodes_per_second as u64,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "move chosen"
        );
        (completed_move, result)
    }
}

fn stats(depth: u8, score: i32, nodes: u64, elapsed: Duration, pv: Vec<usize>) -> SearchStats {
    SearchStats {
        depth,
        nodes,
        nodes_per_second: nodes as f64 / elapsed.as_secs_f64().max(1e-9),
        elapsed,
        score,
        pv,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dropfour_core::{Board, Player};

    use super::{SearchEngine, SearchStats, negamax::INF};
    use crate::config::EngineConfig;

    fn engine(max_depth: u8) -> SearchEngine {
        SearchEngine::new(EngineConfig::new(Duration::from_secs(60), max_depth))
    }

    #[test]
    fn depth_1_returns_valid_move() {
        let mut board = Board::new();
        let (col, stats) = engine(1).choose_move(&mut board, Player::Computer);
        assert!(board.valid_moves().contains(&col));
        assert_eq!(stats.depth, 1);
        assert_eq!(stats.pv, vec![col]);
    }

    #[test]
    fn nodes_accumulate_across_iterations() {
        let mut board = Board::from_moves(Player::Human, &[4, 5]).unwrap();
        let (_, shallow) = engine(1).choose_move(&mut board, Player::Human);
        let (_, deeper) = engine(3).choose_move(&mut board, Player::Human);
        // Depth 1 visits the root plus one leaf per column.
        assert_eq!(shallow.nodes, 11);
        assert!(deeper.nodes > shallow.nodes);
    }

    #[test]
    fn callback_sees_each_completed_depth() {
        let mut board = Board::new();
        let mut depths = Vec::new();
        let mut last_nodes = 0;
        engine(3).choose_move_with(&mut board, Player::Computer, |stats| {
            assert!(stats.nodes > last_nodes);
            assert!(!stats.pv.is_empty());
            last_nodes = stats.nodes;
            depths.push(stats.depth);
        });
        assert_eq!(depths, vec![1, 2, 3]);
    }

    #[test]
    fn zero_budget_falls_back_to_first_valid_move() {
        let mut board = Board::from_moves(Player::Human, &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let engine = SearchEngine::new(EngineConfig::new(Duration::ZERO, 8));

        let (col, stats) = engine.choose_move(&mut board, Player::Human);

        assert!(board.valid_moves().contains(&col));
        // Column 0 is full, so the first valid move is column 1.
        if stats.depth == 0 {
            assert_eq!(col, 1);
            assert_eq!(stats.score, -INF);
            assert_eq!(stats.pv, vec![1]);
        }
    }

    #[test]
    fn pv_ordering_agrees_on_forced_win() {
        let mut board = Board::from_moves(Player::Computer, &[0, 0, 1, 1, 2, 2]).unwrap();
        let config = EngineConfig::new(Duration::from_secs(60), 4).with_pv_ordering(true);
        let (col, stats) = SearchEngine::new(config).choose_move(&mut board, Player::Computer);
        assert_eq!(col, 3);
        assert_eq!(stats.pv[0], 3);
    }

    #[test]
    fn stats_default_is_zeroed() {
        let stats = SearchStats::default();
        assert_eq!(stats.depth, 0);
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.elapsed_secs(), 0.0);
        assert!(stats.pv.is_empty());
    }
}
