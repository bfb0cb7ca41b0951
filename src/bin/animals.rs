//! Strategy demo: three animals with swappable behaviors.
//!
//! Reads one token per line from stdin: `f1`/`w1` make the ostrich fly or
//! walk, `f2`/`w2` the eagle, `f3`/`w3` the lion, `q` quits. Anything
//! else is ignored. Diagnostics go to stderr via `RUST_LOG`.

use anyhow::Result;
use std::io;
use vendo::repl::{self, MenagerieSession};

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
    let mut session = MenagerieSession::new();
    repl::run(stdin.lock(), &mut stdout, &mut session)?;

    Ok(())
}
