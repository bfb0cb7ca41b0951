//! The imperative shell: a blocking line loop over a session.
//!
//! All printing happens here; the machines, behaviors and scanners stay
//! pure. The loop is generic over its reader and writer so tests can
//! drive it from buffers.
//!
//! Loop contract:
//! - one trimmed token per line
//! - `q` quits without touching the session
//! - unrecognized tokens are ignored without any message

mod error;
mod session;

pub use error::ReplError;
pub use session::{MenagerieSession, ScanSession, Session, VendingSession};

use std::io::{BufRead, Write};
use tracing::debug;

/// Token that ends the loop.
pub const QUIT: &str = "q";

/// Drive `session` with lines from `input` until `q` or end of input.
///
/// # Example
///
/// ```rust
/// use vendo::repl::{self, VendingSession};
///
/// let input = b"i\nr\nq\ni\n" as &[u8];
/// let mut output = Vec::new();
/// let mut session = VendingSession::cancel_flow();
///
/// repl::run(input, &mut output, &mut session).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert_eq!(
///     transcript,
///     "state change: HasCoin\nreturning your coin\nstate change: NoCoin\n"
/// );
/// ```
pub fn run<R, W, S>(input: R, output: &mut W, session: &mut S) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
    S: Session,
{
    for line in input.lines() {
        let line = line?;
        let token = line.trim();

        if token == QUIT {
            debug!("quit token received");
            break;
        }

        for reply in session.answer(token) {
            writeln!(output, "{reply}")?;
        }
    }

    Ok(())
}
