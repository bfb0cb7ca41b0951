//! The two vending machine configurations.
//!
//! Both machines sell exactly one thing: a walk through the State pattern.
//! They differ in their recovery policy and are deliberately kept as two
//! separate machines rather than merged into one:
//!
//! - [`CancelFlow`]: dispensing takes two steps (`ItemReleasing`, then
//!   `ItemReleased`) and the user can cancel before the dispense
//!   completes, landing back on `HasCoin`.
//! - [`TakeFlow`]: dispensing completes immediately (`ItemReleased`) and
//!   the user takes the item to start over at `NoCoin`.
//!
//! Neither machine tracks coins or inventory; the state is the whole of
//! the data model.

mod cancel_flow;
mod take_flow;

pub use cancel_flow::CancelFlow;
pub use take_flow::TakeFlow;
