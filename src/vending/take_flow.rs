//! Three-state configuration with take-after-dispense recovery.

use crate::core::Command;
use crate::machine::{Dispatch, Step};
use crate::state_enum;

state_enum! {
    /// States of the take-flow machine.
    ///
    /// Selecting an item dispenses it in a single step; the machine then
    /// waits in `ItemReleased` until the item is taken, which restarts the
    /// cycle at `NoCoin`.
    pub enum TakeFlow {
        NoCoin,
        HasCoin,
        ItemReleased,
    }
    dispensing: [ItemReleased]
}

impl TakeFlow {
    /// Map a console token to a command of this configuration.
    pub fn command_for(token: &str) -> Option<Command> {
        match token {
            "i" => Some(Command::InsertCoin),
            "r" => Some(Command::Refund),
            "s" => Some(Command::SelectItem),
            "t" => Some(Command::TakeItem),
            _ => None,
        }
    }
}

impl Dispatch for TakeFlow {
    fn dispatch(&self, command: Command) -> Step<Self> {
        match (self, command) {
            (Self::NoCoin, Command::InsertCoin) => Step::go(Self::HasCoin),
            (Self::NoCoin, Command::Refund) => Step::reject("no coin to refund"),
            (Self::NoCoin, Command::SelectItem) => Step::reject("insert a coin first"),
            (Self::NoCoin, Command::CancelItem | Command::TakeItem) => {
                Step::reject("select an item first")
            }

            (Self::HasCoin, Command::InsertCoin) => Step::reject("coin already inserted"),
            (Self::HasCoin, Command::Refund) => Step::announce("returning your coin", Self::NoCoin),
            (Self::HasCoin, Command::SelectItem) => Step::go(Self::ItemReleased),
            (Self::HasCoin, Command::CancelItem | Command::TakeItem) => {
                Step::reject("select an item first")
            }

            (Self::ItemReleased, Command::TakeItem) => Step::announce("item taken", Self::NoCoin),
            (Self::ItemReleased, _) => Step::reject("please take your item"),
        }
    }
}
