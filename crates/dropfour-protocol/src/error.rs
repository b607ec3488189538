//! Protocol errors.

use dropfour_core::BoardError;

/// Errors that can occur while reading and applying protocol commands.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command has a keyword other than `first` or `moves`.
    #[error("malformed position command: expected `first <player>` or `moves <columns>`")]
    MalformedPosition,

    /// A column token in the `position` command is not a number.
    #[error("invalid column: {token}")]
    InvalidColumn {
        /// The token that failed to parse.
        token: String,
    },

    /// A column parsed but could not be played.
    #[error("illegal move {column}: {source}")]
    IllegalMove {
        column: usize,
        #[source]
        source: BoardError,
    },

    /// A move was listed after the game had already been won.
    #[error("move {column} played after the game was decided")]
    GameOver {
        column: usize,
    },

    /// `first` named neither `human` nor `computer`.
    #[error("unknown player: {name}")]
    UnknownPlayer {
        name: String,
    },

    /// `setoption` without `name <Name> value <v>`.
    #[error("malformed setoption command: expected `name <Name> value <v>`")]
    MalformedOption,

    /// `setoption` for an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        name: String,
    },

    /// The option exists but the value is out of range or unparsable.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        name: String,
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
