//! Coin-operated vending machine, take-after-dispense configuration.
//!
//! Reads one token per line from stdin:
//! `i` insert coin, `r` refund, `s` select item, `t` take item, `q` quit.
//! Anything else is ignored. Diagnostics go to stderr via `RUST_LOG`.

use anyhow::Result;
use std::io;
use vendo::repl::{self, VendingSession};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = VendingSession::take_flow();
    repl::run(stdin.lock(), &mut stdout, &mut session)?;

    Ok(())
}
