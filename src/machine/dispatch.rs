//! Pure command dispatch.
//!
//! States answer commands with a `Step`: an optional reply for the user
//! and an optional successor state. The owning machine applies the
//! successor; states never reach back into the machine.

use crate::core::{Command, State};

/// The pure result of dispatching one command to one state.
///
/// `next: None` means the machine stays where it is. A step can carry a
/// reply, a successor, both (refund replies and transitions), or neither.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S: State> {
    /// Reply to print for the user, if any.
    pub reply: Option<&'static str>,
    /// Successor state, if the command causes a transition.
    pub next: Option<S>,
}

impl<S: State> Step<S> {
    /// Stay in the current state with a rejection or status reply.
    pub fn reject(reply: &'static str) -> Self {
        Self {
            reply: Some(reply),
            next: None,
        }
    }

    /// Transition silently; the machine announces the new state itself.
    pub fn go(next: S) -> Self {
        Self {
            reply: None,
            next: Some(next),
        }
    }

    /// Reply and transition in the same step.
    pub fn announce(reply: &'static str, next: S) -> Self {
        Self {
            reply: Some(reply),
            next: Some(next),
        }
    }

    /// True if this step leaves the state unchanged.
    pub fn stays(&self) -> bool {
        self.next.is_none()
    }
}

/// Pure per-state command handling.
///
/// Implementations are exhaustive matches over state x command, so the
/// compiler checks that every cell of the transition table is filled.
pub trait Dispatch: State {
    /// Answer `command` from this state.
    fn dispatch(&self, command: Command) -> Step<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    impl Dispatch for TestState {
        fn dispatch(&self, command: Command) -> Step<Self> {
            match (self, command) {
                (Self::Idle, Command::SelectItem) => Step::go(Self::Busy),
                (Self::Busy, Command::Refund) => Step::announce("undone", Self::Idle),
                _ => Step::reject("nope"),
            }
        }
    }

    #[test]
    fn reject_stays_put() {
        let step = TestState::Idle.dispatch(Command::Refund);
        assert!(step.stays());
        assert_eq!(step.reply, Some("nope"));
    }

    #[test]
    fn go_carries_successor_without_reply() {
        let step = TestState::Idle.dispatch(Command::SelectItem);
        assert_eq!(step.next, Some(TestState::Busy));
        assert_eq!(step.reply, None);
    }

    #[test]
    fn announce_carries_reply_and_successor() {
        let step = TestState::Busy.dispatch(Command::Refund);
        assert_eq!(step.reply, Some("undone"));
        assert_eq!(step.next, Some(TestState::Idle));
    }
}
