//! Scoped piece placement for search.
//!
//! [`Board::place`] drops a piece and hands back a [`Placement`] guard that
//! derefs to the board. Dropping the guard undoes the move, so a placement is
//! released on every exit path: normal return, early `break`, `?`
//! propagation, or unwinding.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, CONNECT_N};
use crate::error::BoardError;
use crate::player::Player;
use crate::pos::Pos;

/// A piece on loan to the board. Undone when dropped.
///
/// While the guard is alive the board may be mutated through it, but every
/// nested `drop` must be balanced by an `undo` (or a nested guard) before the
/// guard itself goes out of scope.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// Where the piece landed.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Winning line completed by this placement, if any.
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; CONNECT_N]> {
        self.board.check_win_from(self.pos.row, self.pos.col)
    }

    /// Return `true` if this placement completes a line.
    #[inline]
    pub fn is_win(&self) -> bool {
        self.winning_line().is_some()
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo();
    }
}

impl Board {
    /// Drop a piece and return a guard that undoes it when dropped.
    ///
    /// Fails exactly like [`Board::drop`], leaving the board untouched.
    pub fn place(&mut self, col: usize, player: Player) -> Result<Placement<'_>, BoardError> {
        let row = self.drop(col, player)?;
        Ok(Placement {
            board: self,
            pos: Pos::new(row, col),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, ROWS};
    use crate::error::BoardError;
    use crate::player::{Cell, Player};
    use crate::pos::Pos;

    #[test]
    fn guard_undoes_on_scope_exit() {
        let mut board = Board::from_moves(Player::Human, &[4, 5]).unwrap();
        {
            let placed = board.place(4, Player::Human).unwrap();
            assert_eq!(placed.pos(), Pos::new(ROWS - 2, 4));
            assert_eq!(placed.cell(ROWS - 2, 4), Cell::Human);
            assert_eq!(placed.move_count(), 3);
        }
        assert_eq!(board.move_stack(), &[4, 5]);
        assert_eq!(board.cell(ROWS - 2, 4), Cell::Empty);
        board.validate().unwrap();
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = board.place(0, Player::Computer).unwrap();
            {
                let inner = outer.place(0, Player::Human).unwrap();
                assert_eq!(inner.heights()[0], 2);
            }
            assert_eq!(outer.heights()[0], 1);
        }
        assert_eq!(board.heights()[0], 0);
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn guard_undoes_on_early_error_return() {
        fn fails_inside(board: &mut Board) -> Result<(), &'static str> {
            let _placed = board.place(2, Player::Computer).map_err(|_| "drop")?;
            Err("aborted")
        }

        let mut board = Board::new();
        assert_eq!(fails_inside(&mut board), Err("aborted"));
        assert_eq!(board.move_count(), 0);
        board.validate().unwrap();
    }

    #[test]
    fn failed_place_leaves_board_untouched() {
        let mut board = Board::new();
        let err = board.place(99, Player::Human).err();
        assert!(matches!(err, Some(BoardError::ColumnOutOfRange { .. })));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn detects_winning_placement() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop(col, Player::Computer).unwrap();
        }
        let placed = board.place(3, Player::Computer).unwrap();
        assert!(placed.is_win());
        assert_eq!(placed.winning_line().map(|l| l[3]), Some(Pos::new(ROWS - 1, 3)));
        drop(placed);

        let placed = board.place(5, Player::Computer).unwrap();
        assert!(!placed.is_win());
    }
}
