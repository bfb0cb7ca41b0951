//! Strategy composition: animals built from swappable behaviors.
//!
//! The Strategy half of the crate. An [`Animal`] is composed of two
//! independent capability axes (fly, walk) supplied as trait objects at
//! construction; actions delegate without inspecting which behavior is
//! installed. Contrast with the vending machines, where behavior varies
//! with a mutable current state.

mod animal;
mod behavior;

pub use animal::Animal;
pub use behavior::{
    CannotFly, FliesWithWings, FlyBehavior, WalkBehavior, WalksOnFourLegs, WalksOnTwoLegs,
};
