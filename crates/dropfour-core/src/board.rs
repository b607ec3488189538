//! The game board: grid contents, column heights, and the undo stack.

use std::fmt;

use crate::column_list::ColumnList;
use crate::error::BoardError;
use crate::player::{Cell, Player};
use crate::pos::Pos;

/// Number of rows in the grid.
pub const ROWS: usize = 10;

/// Number of columns in the grid.
pub const COLS: usize = 10;

/// Pieces in a line needed to win.
pub const CONNECT_N: usize = 4;

/// Complete game state, mutated in place by [`drop`](Board::drop) and
/// [`undo`](Board::undo).
///
/// `heights[c]` always equals the number of pieces in column `c`, and the
/// move stack holds exactly one column per piece on the grid.
#[derive(Clone)]
pub struct Board {
    /// Cell contents, indexed `[row][col]` with row 0 at the top.
    grid: [[Cell; COLS]; ROWS],
    /// Filled cells per column.
    heights: [usize; COLS],
    /// Columns of every placement still on the board, oldest first.
    move_stack: Vec<usize>,
    /// Most recent placement, cleared by undo.
    last_move: Option<Pos>,
    /// Cells of the last detected win, kept for highlighting.
    winning_cells: Option<[Pos; CONNECT_N]>,
}

impl Board {
    /// Return an empty board.
    pub fn new() -> Board {
        Board {
            grid: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
            move_stack: Vec::with_capacity(ROWS * COLS),
            last_move: None,
            winning_cells: None,
        }
    }

    /// Build a position by dropping `moves` in order, alternating sides
    /// starting with `first`.
    pub fn from_moves(first: Player, moves: &[usize]) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let mut player = first;
        for &col in moves {
            board.drop(col, player)?;
            player = !player;
        }
        Ok(board)
    }

    /// Return the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Return the cell at `pos`.
    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.grid[pos.row][pos.col]
    }

    /// Return the whole grid, row 0 first.
    #[inline]
    pub fn grid(&self) -> &[[Cell; COLS]; ROWS] {
        &self.grid
    }

    /// Return the per-column fill counts.
    #[inline]
    pub fn heights(&self) -> &[usize; COLS] {
        &self.heights
    }

    /// Return the columns played so far, oldest first.
    #[inline]
    pub fn move_stack(&self) -> &[usize] {
        &self.move_stack
    }

    /// Return the number of pieces on the board.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_stack.len()
    }

    /// Return the most recent placement, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Return the cached winning line found by [`has_winner`](Board::has_winner).
    #[inline]
    pub fn winning_cells(&self) -> Option<&[Pos; CONNECT_N]> {
        self.winning_cells.as_ref()
    }

    /// Return the side to move, given which side moved first.
    #[inline]
    pub fn side_to_move(&self, first: Player) -> Player {
        if self.move_stack.len() % 2 == 0 {
            first
        } else {
            !first
        }
    }

    /// Return every column that can still accept a piece, in ascending order.
    pub fn valid_moves(&self) -> ColumnList {
        (0..COLS).filter(|&col| self.heights[col] < ROWS).collect()
    }

    /// Return `true` if no column accepts another piece.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h >= ROWS)
    }

    /// Drop a piece for `player` into `col` and return the row it lands on.
    ///
    /// Leaves the board untouched when the column is out of range or full.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange {
                column: col,
                columns: COLS,
            });
        }
        if self.heights[col] >= ROWS {
            return Err(BoardError::ColumnFull { column: col });
        }

        let row = ROWS - 1 - self.heights[col];
        self.grid[row][col] = Cell::from(player);
        self.heights[col] += 1;
        self.move_stack.push(col);
        self.last_move = Some(Pos::new(row, col));
        Ok(row)
    }

    /// Take back the most recent placement. No-op on an empty board.
    pub fn undo(&mut self) {
        let Some(col) = self.move_stack.pop() else {
            return;
        };
        self.heights[col] -= 1;
        let row = ROWS - 1 - self.heights[col];
        self.grid[row][col] = Cell::Empty;
        self.last_move = None;
        self.winning_cells = None;
    }

    /// Record a winning line for display.
    #[inline]
    pub(crate) fn set_winning_cells(&mut self, cells: [Pos; CONNECT_N]) {
        self.winning_cells = Some(cells);
    }

    /// Validate the height and move-stack invariants.
    pub fn validate(&self) -> Result<(), BoardError> {
        for col in 0..COLS {
            let height = self.heights[col];
            let count = (0..ROWS)
                .rev()
                .take_while(|&row| !self.grid[row][col].is_empty())
                .count();
            let total = (0..ROWS)
                .filter(|&row| !self.grid[row][col].is_empty())
                .count();
            // A gap under a piece shows up as total != count.
            if height != count || total != count {
                return Err(BoardError::InconsistentHeights {
                    column: col,
                    height,
                    count,
                });
            }
        }

        let pieces: usize = self.heights.iter().sum();
        if pieces != self.move_stack.len() {
            return Err(BoardError::InconsistentStack {
                stack_len: self.move_stack.len(),
                pieces,
            });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(moves: {:?})", self.move_stack)
    }
}

/// Wrapper for pretty-printing a board as a text grid.
///
/// `X` marks computer pieces, `O` human pieces, `.` empty cells.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..ROWS {
            for col in 0..COLS {
                let c = board.grid[row][col].player().map_or('.', Player::symbol);
                if col + 1 < COLS {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            if col + 1 < COLS {
                write!(f, "{} ", col % 10)?;
            } else {
                write!(f, "{}", col % 10)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, COLS, ROWS};
    use crate::error::BoardError;
    use crate::player::{Cell, Player};
    use crate::pos::Pos;

    fn column_count(board: &Board, col: usize) -> usize {
        (0..ROWS).filter(|&r| !board.cell(r, col).is_empty()).count()
    }

    fn assert_heights_match(board: &Board) {
        for col in 0..COLS {
            assert_eq!(board.heights()[col], column_count(board, col), "column {col}");
        }
        assert_eq!(board.move_stack().len(), board.heights().iter().sum::<usize>());
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.valid_moves().len(), COLS);
        assert!(!board.is_full());
        assert_eq!(board.last_move(), None);
        board.validate().unwrap();
    }

    #[test]
    fn drop_lands_on_bottom_row() {
        let mut board = Board::new();
        assert_eq!(board.drop(3, Player::Human), Ok(ROWS - 1));
        assert_eq!(board.drop(3, Player::Computer), Ok(ROWS - 2));
        assert_eq!(board.cell(ROWS - 1, 3), Cell::Human);
        assert_eq!(board.cell(ROWS - 2, 3), Cell::Computer);
        assert_eq!(board.heights()[3], 2);
        assert_eq!(board.move_stack(), &[3, 3]);
        assert_eq!(board.last_move(), Some(Pos::new(ROWS - 2, 3)));
    }

    #[test]
    fn drop_out_of_range_leaves_board_untouched() {
        let mut board = Board::from_moves(Player::Human, &[0, 1]).unwrap();
        let before = board.clone();
        assert_eq!(
            board.drop(COLS, Player::Human),
            Err(BoardError::ColumnOutOfRange {
                column: COLS,
                columns: COLS
            })
        );
        assert_eq!(board.grid(), before.grid());
        assert_eq!(board.move_stack(), before.move_stack());
    }

    #[test]
    fn drop_into_full_column_fails() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
            board.drop(0, player).unwrap();
        }
        assert!(!board.valid_moves().contains(&0));
        assert_eq!(
            board.drop(0, Player::Human),
            Err(BoardError::ColumnFull { column: 0 })
        );
        assert_eq!(board.heights()[0], ROWS);
        assert_eq!(board.move_count(), ROWS);
    }

    #[test]
    fn drop_undo_restores_position() {
        let mut board = Board::from_moves(Player::Human, &[4, 4, 5, 3, 9, 0]).unwrap();
        for col in board.valid_moves().iter().copied() {
            let before = board.clone();
            board.drop(col, Player::Computer).unwrap();
            board.undo();
            assert_eq!(board.grid(), before.grid());
            assert_eq!(board.heights(), before.heights());
            assert_eq!(board.move_stack(), before.move_stack());
        }
    }

    #[test]
    fn undo_on_empty_board_is_noop() {
        let mut board = Board::new();
        board.undo();
        assert_eq!(board.move_count(), 0);
        board.validate().unwrap();
    }

    #[test]
    fn undo_clears_last_move() {
        let mut board = Board::from_moves(Player::Human, &[2, 2]).unwrap();
        board.undo();
        assert_eq!(board.last_move(), None);
        assert_eq!(board.move_stack(), &[2]);
        assert_eq!(board.cell(ROWS - 2, 2), Cell::Empty);
    }

    #[test]
    fn heights_invariant_over_mixed_sequence() {
        let mut board = Board::new();
        let script = [3usize, 3, 7, 1, 3, 9, 9, 0, 5, 5, 5, 5];
        let mut player = Player::Human;
        for (i, &col) in script.iter().enumerate() {
            board.drop(col, player).unwrap();
            player = !player;
            if i % 3 == 2 {
                board.undo();
                player = !player;
            }
            assert_heights_match(&board);
            board.validate().unwrap();
        }
    }

    #[test]
    fn full_board() {
        let mut board = Board::new();
        let mut player = Player::Human;
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop(col, player).unwrap();
                player = !player;
            }
        }
        assert!(board.is_full());
        assert!(board.valid_moves().is_empty());
        board.validate().unwrap();
    }

    #[test]
    fn clone_is_independent() {
        let mut board = Board::from_moves(Player::Computer, &[1, 2, 3]).unwrap();
        let copy = board.clone();
        board.drop(4, Player::Computer).unwrap();
        assert_eq!(copy.move_stack(), &[1, 2, 3]);
        assert_eq!(copy.heights()[4], 0);
        assert_eq!(board.heights()[4], 1);
    }

    #[test]
    fn side_to_move_alternates() {
        let board = Board::from_moves(Player::Human, &[0, 1, 2]).unwrap();
        assert_eq!(board.side_to_move(Player::Human), Player::Computer);
        assert_eq!(board.side_to_move(Player::Computer), Player::Human);
        let board = Board::from_moves(Player::Human, &[0, 1]).unwrap();
        assert_eq!(board.side_to_move(Player::Human), Player::Human);
    }

    #[test]
    fn from_moves_alternates_players() {
        let board = Board::from_moves(Player::Computer, &[5, 5]).unwrap();
        assert_eq!(board.cell(ROWS - 1, 5), Cell::Computer);
        assert_eq!(board.cell(ROWS - 2, 5), Cell::Human);
    }

    #[test]
    fn from_moves_rejects_bad_column() {
        let err = Board::from_moves(Player::Human, &[0, 42]).unwrap_err();
        assert!(err.is_invalid_column());
    }

    #[test]
    fn pretty_print() {
        let board = Board::from_moves(Player::Human, &[0, 9]).unwrap();
        let output = format!("{}", board.pretty());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[ROWS - 1], "O . . . . . . . . X");
        assert_eq!(lines[0], ". . . . . . . . . .");
        assert_eq!(lines[ROWS], "0 1 2 3 4 5 6 7 8 9");
    }

    #[test]
    fn debug_shows_moves() {
        let board = Board::from_moves(Player::Human, &[1, 2]).unwrap();
        assert_eq!(format!("{board:?}"), "Board(moves: [1, 2])");
    }
}
