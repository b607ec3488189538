//! Error types for board mutation and validation.

/// Errors reported by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The column index lies outside the grid.
    #[error("column {column} is out of range (0..{columns})")]
    ColumnOutOfRange {
        /// The rejected column.
        column: usize,
        /// Number of columns on the board.
        columns: usize,
    },
    /// The column has no empty cell left.
    #[error("column {column} is full")]
    ColumnFull {
        /// The rejected column.
        column: usize,
    },
    /// A column's recorded height disagrees with the pieces it holds.
    #[error("column {column} has height {height} but holds {count} stacked pieces")]
    InconsistentHeights {
        /// The offending column.
        column: usize,
        /// Recorded height.
        height: usize,
        /// Pieces found stacked from the bottom row.
        count: usize,
    },
    /// The move stack length disagrees with the total piece count.
    #[error("move stack holds {stack_len} moves but the grid holds {pieces} pieces")]
    InconsistentStack {
        /// Length of the move stack.
        stack_len: usize,
        /// Sum of all column heights.
        pieces: usize,
    },
}

impl BoardError {
    /// Return `true` for the two rejected-drop variants.
    pub fn is_invalid_column(&self) -> bool {
        matches!(
            self,
            BoardError::ColumnOutOfRange { .. } | BoardError::ColumnFull { .. }
        )
    }
}
