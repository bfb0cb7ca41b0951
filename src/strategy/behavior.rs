//! Swappable locomotion behaviors.
//!
//! Each behavior is a pure value answering with a fixed message; the
//! shell decides what to do with it. Behaviors are the Strategy half of
//! the crate: one capability per axis, assigned at construction.

/// Locomotion by air.
pub trait FlyBehavior: Send + Sync {
    /// What happens when the animal tries to fly.
    fn fly(&self) -> &'static str;
}

/// Locomotion by ground.
pub trait WalkBehavior: Send + Sync {
    /// What happens when the animal walks.
    fn walk(&self) -> &'static str;
}

/// Refuses to leave the ground.
pub struct CannotFly;

impl FlyBehavior for CannotFly {
    fn fly(&self) -> &'static str {
        "No Way! I can't fly."
    }
}

/// Takes off on wings.
pub struct FliesWithWings;

impl FlyBehavior for FliesWithWings {
    fn fly(&self) -> &'static str {
        "Yes! I can fly."
    }
}

/// Bipedal gait.
pub struct WalksOnTwoLegs;

impl WalkBehavior for WalksOnTwoLegs {
    fn walk(&self) -> &'static str {
        "Walking with two foot..."
    }
}

/// Quadrupedal gait.
pub struct WalksOnFourLegs;

impl WalkBehavior for WalksOnFourLegs {
    fn walk(&self) -> &'static str {
        "Walking with four foot..."
    }
}
