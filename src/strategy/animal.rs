//! Animals composed from behaviors.

use super::behavior::{
    CannotFly, FliesWithWings, FlyBehavior, WalkBehavior, WalksOnFourLegs, WalksOnTwoLegs,
};

/// A named bundle of one fly-behavior and one walk-behavior.
///
/// Both behaviors are chosen at construction and immutable for the
/// animal's lifetime. Invoking an action delegates unconditionally to the
/// assigned behavior - there is no state and no transitions.
///
/// # Example
///
/// ```rust
/// use vendo::strategy::Animal;
///
/// let eagle = Animal::eagle();
/// assert_eq!(eagle.fly(), "Yes! I can fly.");
/// assert_eq!(eagle.walk(), "Walking with two foot...");
/// ```
pub struct Animal {
    name: &'static str,
    fly_behavior: Box<dyn FlyBehavior>,
    walk_behavior: Box<dyn WalkBehavior>,
}

impl Animal {
    /// Compose an animal from a name and two behaviors.
    pub fn new(
        name: &'static str,
        fly_behavior: Box<dyn FlyBehavior>,
        walk_behavior: Box<dyn WalkBehavior>,
    ) -> Self {
        Self {
            name,
            fly_behavior,
            walk_behavior,
        }
    }

    /// Flightless biped.
    pub fn ostrich() -> Self {
        Self::new("Ostrich", Box::new(CannotFly), Box::new(WalksOnTwoLegs))
    }

    /// Flying biped.
    pub fn eagle() -> Self {
        Self::new("Eagle", Box::new(FliesWithWings), Box::new(WalksOnTwoLegs))
    }

    /// Flightless quadruped.
    pub fn lion() -> Self {
        Self::new("Lion", Box::new(CannotFly), Box::new(WalksOnFourLegs))
    }

    /// The animal's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Delegate to the assigned fly-behavior.
    pub fn fly(&self) -> &'static str {
        self.fly_behavior.fly()
    }

    /// Delegate to the assigned walk-behavior.
    pub fn walk(&self) -> &'static str {
        self.walk_behavior.walk()
    }
}
