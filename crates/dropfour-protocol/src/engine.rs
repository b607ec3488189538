//! Synchronous protocol loop around a [`SearchEngine`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use dropfour_core::{Board, Player};
use dropfour_engine::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT, EngineConfig, SearchEngine, SearchStats};

use crate::command::{Command, EngineOption, MAX_DEPTH_LIMIT, PositionInfo, parse_command};
use crate::error::ProtocolError;

/// The protocol engine, holding the current game and the searcher.
///
/// Commands are handled one at a time on the calling thread; `go` blocks
/// until the search returns.
pub struct ProtocolEngine {
    board: Board,
    first: Player,
    config: EngineConfig,
    engine: SearchEngine,
}

impl ProtocolEngine {
    /// Create an engine with an empty board and default limits.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            first: Player::Human,
            config,
            engine: SearchEngine::new(config),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current search limits.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the protocol loop on stdin/stdout until `quit` or input closes.
    pub fn run(mut self) -> Result<(), ProtocolError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the protocol loop over arbitrary input and output.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => warn!(error = %e, "protocol parse error"),
            }
            out.flush()?;
        }

        info!("dropfour shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ProtocolError> {
        match cmd {
            Command::Hello => self.handle_hello(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame => self.handle_newgame(),
            Command::Position(info) => self.handle_position(info),
            Command::Go => self.handle_go(out)?,
            Command::SetOption(opt) => self.handle_setoption(opt),
            Command::Show => writeln!(out, "{}", self.board.pretty())?,
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name dropfour")?;
        writeln!(out, "id author the dropfour developers")?;
        writeln!(
            out,
            "option name TimeLimit type spin default {} min 1 max 3600000",
            DEFAULT_TIME_LIMIT.as_millis()
        )?;
        writeln!(
            out,
            "option name MaxDepth type spin default {DEFAULT_MAX_DEPTH} min 1 max {MAX_DEPTH_LIMIT}"
        )?;
        writeln!(out, "option name PvOrdering type check default false")?;
        writeln!(out, "hellook")
    }

    fn handle_newgame(&mut self) {
        self.board = Board::new();
        self.first = Player::Human;
    }

    fn handle_position(&mut self, info: PositionInfo) {
        self.board = info.board;
        self.first = info.first;
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        self.config = match option {
            EngineOption::TimeLimit(limit) => EngineConfig {
                time_limit: limit,
                ..self.config
            },
            EngineOption::MaxDepth(depth) => EngineConfig {
                max_depth: depth,
                ..self.config
            },
            EngineOption::PvOrdering(enabled) => self.config.with_pv_ordering(enabled),
        };
        debug!(config = ?self.config, "search limits updated");
        self.engine = SearchEngine::new(self.config);
    }

    fn handle_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.board.is_full() || self.board.has_winner().is_some() {
            return writeln!(out, "bestmove none");
        }

        let side = self.board.side_to_move(self.first);
        let mut write_error = None;
        let (column, _) = self.engine.choose_move_with(&mut self.board, side, |stats| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = writeln!(out, "{}", info_line(stats)) {
                write_error = Some(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e);
        }

        writeln!(out, "bestmove {column}")
    }
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Format one completed iteration as an `info` line.
fn info_line(stats: &SearchStats) -> String {
    let pv: Vec<String> = stats.pv.iter().map(|c| c.to_string()).collect();
    format!(
        "info depth {} score {} nodes {} nps {} time {} pv {}",
        stats.depth,
        stats.score,
        stats.nodes,
        stats.nodes_per_second as u64,
        stats.elapsed.as_millis(),
        pv.join(" ")
    )
}
