//! Source scanner demo.
//!
//! Reads C-like source one line at a time from stdin and reports the
//! position of every division operator and the contents of every string
//! literal on that line. `q` on its own line quits.

use anyhow::Result;
use std::io;
use vendo::repl::{self, ScanSession};

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
    let mut session = ScanSession;
    repl::run(stdin.lock(), &mut stdout, &mut session)?;

    Ok(())
}
