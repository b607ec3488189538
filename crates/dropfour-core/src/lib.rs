//! Core game types: board state, drop/undo, win detection, and evaluation.

mod board;
mod column_list;
mod error;
pub mod eval;
mod placement;
mod player;
mod pos;
mod win;

pub use board::{Board, COLS, CONNECT_N, PrettyBoard, ROWS};
pub use column_list::ColumnList;
pub use error::BoardError;
pub use placement::Placement;
pub use player::{Cell, Player};
pub use pos::Pos;
pub use win::DIRECTIONS;
