//! Move ordering from a column hint.

use dropfour_core::ColumnList;

/// Order `moves` so that hinted columns come first, in hint order, followed by
/// the remaining moves in the order given.
///
/// Hint columns that are not in `moves` are skipped, and a column repeated in
/// the hint is taken once.
pub fn order_moves(moves: &[usize], hint: &[usize]) -> ColumnList {
    let mut ordered = ColumnList::new();
    for &col in hint {
        if moves.contains(&col) && !ordered.contains(&col) {
            ordered.push(col);
        }
    }
    for &col in moves {
        if !ordered.contains(&col) {
            ordered.push(col);
        }
    }
    ordered
}

/// Build the next iteration's hint from a principal variation.
///
/// PV columns lead, then every root move not already listed in ascending
/// order.
pub fn hint_from_pv(pv: &[usize], root_moves: &[usize]) -> ColumnList {
    order_moves(root_moves, pv)
}
