//! Four-state configuration with cancel-before-dispense recovery.

use crate::core::Command;
use crate::machine::{Dispatch, Step};
use crate::state_enum;

state_enum! {
    /// States of the cancel-flow machine.
    ///
    /// `ItemReleased` rejects every command and no command leads into it;
    /// the release path of this configuration ends at `ItemReleasing`,
    /// which only `CancelItem` can leave.
    pub enum CancelFlow {
        NoCoin,
        HasCoin,
        ItemReleasing,
        ItemReleased,
    }
    dispensing: [ItemReleasing]
}

impl CancelFlow {
    /// Map a console token to a command of this configuration.
    ///
    /// Tokens outside the alphabet return `None` and are dropped by the
    /// loop without a message.
    pub fn command_for(token: &str) -> Option<Command> {
        match token {
            "i" => Some(Command::InsertCoin),
            "r" => Some(Command::Refund),
            "s" => Some(Command::SelectItem),
            "c" => Some(Command::CancelItem),
            _ => None,
        }
    }
}

impl Dispatch for CancelFlow {
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
            (Self::HasCoin, Command::SelectItem) => Step::go(Self::ItemReleasing),
            (Self::HasCoin, Command::CancelItem | Command::TakeItem) => {
                Step::reject("select an item first")
            }

            (Self::ItemReleasing, Command::CancelItem) => Step::go(Self::HasCoin),
            (Self::ItemReleasing, _) => Step::reject("item is being dispensed"),

            (Self::ItemReleased, _) => Step::reject("item dispensed, please wait"),
        }
    }
}
