//! Fixed-capacity list of column indices.

use std::ops::Deref;

use crate::board::COLS;

/// Stack-allocated buffer of columns. Capacity [`COLS`] covers every legal move.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ColumnList {
    cols: [usize; COLS],
    len: usize,
}

impl ColumnList {
    /// Create an empty list.
    pub const fn new() -> ColumnList {
        ColumnList {
            cols: [0; COLS],
            len: 0,
        }
    }

    /// Append a column.
    #[inline]
    pub fn push(&mut self, col: usize) {
        debug_assert!(self.len < COLS);
        self.cols[self.len] = col;
        self.len += 1;
    }

    /// Return the columns as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.cols[..self.len]
    }
}

impl Default for ColumnList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ColumnList {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<usize> for ColumnList {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut list = ColumnList::new();
        for col in iter {
            list.push(col);
        }
        list
    }
}

impl std::fmt::Debug for ColumnList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
