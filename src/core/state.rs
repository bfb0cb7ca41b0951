//! Core State trait for machine states.
//!
//! Every machine state implements this trait, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position of a machine; the machine
/// replaces its state wholesale on every transition.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for transition logging
/// - `PartialEq`: states must be comparable for dispatch logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for inspection
///
/// # Example
///
/// ```rust
/// use vendo::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TurnstileState {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for TurnstileState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// assert_eq!(TurnstileState::Locked.name(), "Locked");
/// assert!(!TurnstileState::Locked.is_dispensing());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this state is part of the release path.
    ///
    /// While dispensing, ordinary commands are rejected and only the
    /// configuration's designated recovery command makes progress.
    ///
    /// Default implementation returns `false`.
    fn is_dispensing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Dispensing,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Dispensing => "Dispensing",
            }
        }

        fn is_dispensing(&self) -> bool {
            matches!(self, Self::Dispensing)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Dispensing.name(), "Dispensing");
    }

    #[test]
    fn is_dispensing_identifies_release_path() {
        assert!(!TestState::Idle.is_dispensing());
        assert!(TestState::Dispensing.is_dispensing());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Idle;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = TestState::Dispensing;
        let cloned = state.clone();
        assert_eq!(state, cloned);
        assert_ne!(state, TestState::Idle);
    }
}
