//! Console loop errors.

use thiserror::Error;

/// Errors that can occur while running the console loop.
///
/// Rejected commands are not errors - they are ordinary replies. The
/// only failure mode is the console streams themselves.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
