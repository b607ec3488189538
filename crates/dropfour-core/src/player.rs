//! Players and grid cells.

use std::fmt;
use std::ops::Not;

/// One of the two sides: the human opponent or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Human = 0,
    Computer = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Evaluation sign: `+1` for the computer, `-1` for the human.
    ///
    /// Multiplying a computer-positive score by `sign()` yields the score
    /// from this player's point of view.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Player::Human => -1,
            Player::Computer => 1,
        }
    }

    /// Parse a lowercase player name (`"human"` or `"computer"`).
    pub fn from_name(name: &str) -> Option<Player> {
        match name {
            "human" => Some(Player::Human),
            "computer" => Some(Player::Computer),
            _ => None,
        }
    }

    /// Grid symbol used by [`PrettyBoard`](crate::PrettyBoard).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// The player occupying this cell, if any.
    #[inline]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Cell {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}
