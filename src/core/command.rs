//! User commands accepted by the vending machines.

use serde::{Deserialize, Serialize};

/// The closed set of commands a vending machine can be asked to perform.
///
/// Each configuration recognizes exactly four of these: both accept
/// `InsertCoin`, `Refund` and `SelectItem`, the cancel-flow adds
/// `CancelItem` and the take-flow adds `TakeItem`. Dispatch is total
/// over the full set, so a machine handed the other configuration's
/// recovery command still answers with a rejection rather than panicking.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Put a coin into the machine.
    InsertCoin,
    /// Ask for the inserted coin back.
    Refund,
    /// Pick an item, starting the release path.
    SelectItem,
    /// Abort a dispense that has not completed (cancel-flow recovery).
    CancelItem,
    /// Collect the dispensed item (take-flow recovery).
    TakeItem,
}

impl Command {
    /// Display name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCoin => "InsertCoin",
            Self::Refund => "Refund",
            Self::SelectItem => "SelectItem",
            Self::CancelItem => "CancelItem",
            Self::TakeItem => "TakeItem",
        }
    }
}
