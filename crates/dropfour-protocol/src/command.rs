//! Protocol command parsing.

use std::time::Duration;

use dropfour_core::{Board, COLS, Player, ROWS};

use crate::error::ProtocolError;

/// Deepest search a `MaxDepth` option may request: one ply per cell.
pub const MAX_DEPTH_LIMIT: u8 = (ROWS * COLS) as u8;

/// A position set up by the `position` command.
#[derive(Debug, Clone)]
pub struct PositionInfo {
    /// Board after every listed move has been dropped.
    pub board: Board,
    /// Who made the first move.
    pub first: Player,
}

/// An engine option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Per-move wall-clock budget.
    TimeLimit(Duration),
    /// Iterative-deepening ceiling.
    MaxDepth(u8),
    /// Feed each iteration's principal variation into the next one's ordering.
    PvOrdering(bool),
}

/// A parsed protocol command.
#[derive(Debug)]
pub enum Command {
    /// `hello` -- identify the engine and list its options.
    Hello,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- empty board, human to move.
    NewGame,
    /// `position` -- set up a board from a move list.
    Position(PositionInfo),
    /// `go` -- search for the side to move.
    Go,
    /// `setoption` -- change a search limit.
    SetOption(EngineOption),
    /// `show` -- print the board.
    Show,
    /// `quit` -- exit the loop.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "hello" => Ok(Command::Hello),
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "go" => Ok(Command::Go),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(rest).map(Command::Position),
        "setoption" => parse_setoption(rest).map(Command::SetOption),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports `position [first human|computer] [moves c1 c2 ...]`. Moves
/// alternate starting with `first`, which defaults to the human.
fn parse_position(tokens: &[&str]) -> Result<PositionInfo, ProtocolError> {
    let mut first = Player::Human;
    let mut rest = tokens;

    if let ["first", name, tail @ ..] = rest {
        first = Player::from_name(name).ok_or_else(|| ProtocolError::UnknownPlayer {
            name: name.to_string(),
        })?;
        rest = tail;
    }

    let columns = match rest {
        [] => &[][..],
        ["moves", columns @ ..] => columns,
        _ => return Err(ProtocolError::MalformedPosition),
    };

    let mut board = Board::new();
    let mut player = first;
    for token in columns {
        let column: usize = token.parse().map_err(|_| ProtocolError::InvalidColumn {
            token: token.to_string(),
        })?;
        if board.has_winner().is_some() {
            return Err(ProtocolError::GameOver { column });
        }
        board
            .drop(column, player)
            .map_err(|source| ProtocolError::IllegalMove { column, source })?;
        player = !player;
    }
    // Cache a final winning line for `show` and `go`.
    board.has_winner();

    Ok(PositionInfo { board, first })
}

/// Parse `setoption name <Name> value <v>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<EngineOption, ProtocolError> {
    let ["name", name, "value", value] = tokens else {
        return Err(ProtocolError::MalformedOption);
    };

    let invalid = || ProtocolError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    if name.eq_ignore_ascii_case("TimeLimit") {
        let ms: u64 = value.parse().map_err(|_| invalid())?;
        if ms == 0 {
            return Err(invalid());
        }
        Ok(EngineOption::TimeLimit(Duration::from_millis(ms)))
    } else if name.eq_ignore_ascii_case("MaxDepth") {
        let depth: u8 = value.parse().map_err(|_| invalid())?;
        if !(1..=MAX_DEPTH_LIMIT).contains(&depth) {
            return Err(invalid());
        }
        Ok(EngineOption::MaxDepth(depth))
    } else if name.eq_ignore_ascii_case("PvOrdering") {
        let enabled: bool = value.parse().map_err(|_| invalid())?;
        Ok(EngineOption::PvOrdering(enabled))
    } else {
        Err(ProtocolError::UnknownOption {
            name: name.to_string(),
        })
    }
}
