//! Macros for ergonomic state declarations.

/// Generate a `State` trait implementation for simple enums.
///
/// Variants listed under `dispensing:` report `is_dispensing() == true`.
///
/// # Example
///
/// ```
/// use vendo::state_enum;
///
/// state_enum! {
///     pub enum GateState {
///         Closed,
///         Opening,
///         Open,
///     }
///     dispensing: [Opening]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(dispensing: [$($dispensing:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_dispensing(&self) -> bool {
                match self {
                    $($(Self::$dispensing => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Idle,
            Busy,
            Releasing,
        }
        dispensing: [Releasing]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Idle;
        assert_eq!(state.name(), "Idle");
        assert!(!state.is_dispensing());

        let releasing = TestState::Releasing;
        assert_eq!(releasing.name(), "Releasing");
        assert!(releasing.is_dispensing());
    }

    #[test]
    fn state_enum_supports_visibility() {
        // The macro should work with pub visibility
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            dispensing: [B]
        }

        let _state = PublicState::A;
    }

    #[test]
    fn state_enum_works_without_dispensing_list() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_dispensing());
        assert_eq!(TestState::Busy.name(), "Busy");
    }
}
