use anyhow::{Context, Result};
use tracing::info;

use dropfour_core::{COLS, CONNECT_N, ROWS};
use dropfour_protocol::ProtocolEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!(rows = ROWS, cols = COLS, connect = CONNECT_N, "dropfour starting");
    ProtocolEngine::new().run().context("protocol loop failed")?;
    Ok(())
}
