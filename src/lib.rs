//! Vendo: didactic behavioral machines
//!
//! Vendo is built around a "pure core, imperative shell" split. The core
//! answers every input with a value - a reply, a successor state, a found
//! position - and the shell is a single blocking console loop that prints
//! those values.
//!
//! # Components
//!
//! - **Vending machines** (State pattern): a machine owns exactly one
//!   current state; dispatch is a pure function of state and command that
//!   returns the next state instead of mutating anything
//! - **Animals** (Strategy pattern): fly/walk behaviors supplied as
//!   interchangeable values at construction
//! - **Scanners**: character-driven machines recovering division
//!   operators and string literals from C-like source
//!
//! # Example
//!
//! ```rust
//! use vendo::core::Command;
//! use vendo::machine::VendingMachine;
//! use vendo::vending::CancelFlow;
//!
//! let mut machine = VendingMachine::new(CancelFlow::NoCoin);
//! machine.handle(Command::InsertCoin);
//! machine.handle(Command::SelectItem);
//! machine.handle(Command::CancelItem);
//!
//! // Cancelling a dispense returns to HasCoin, not NoCoin.
//! assert_eq!(machine.current_state(), &CancelFlow::HasCoin);
//! ```

pub mod core;
pub mod machine;
pub mod repl;
pub mod scanner;
pub mod strategy;
pub mod vending;

// Re-export commonly used types
pub use crate::core::{Command, State, TransitionLog};
pub use crate::machine::{Dispatch, Outcome, Step, VendingMachine};
