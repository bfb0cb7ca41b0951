//! Machine shell that applies pure dispatch steps.

use crate::core::{Command, State, TransitionLog, TransitionRecord};
use crate::machine::dispatch::Dispatch;
use chrono::Utc;
use tracing::{debug, info};

/// What one handled command amounted to.
///
/// The shell turns this into console lines; the machine itself never
/// prints.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<S: State> {
    /// Reply text for the user, if the step produced one.
    pub reply: Option<&'static str>,
    /// The state entered by this command, if it caused a transition.
    pub entered: Option<S>,
}

impl<S: State> Outcome<S> {
    /// True if the command was rejected or otherwise left the state alone.
    pub fn stayed(&self) -> bool {
        self.entered.is_none()
    }
}

/// A vending machine owning exactly one current state.
///
/// Transitions are atomic and synchronous: dispatch is pure, and the
/// machine replaces its state wholesale before `handle` returns. The
/// previous state is discarded; applied transitions land in the log.
///
/// # Example
///
/// ```rust
/// use vendo::core::Command;
/// use vendo::machine::VendingMachine;
/// use vendo::vending::CancelFlow;
///
/// let mut machine = VendingMachine::new(CancelFlow::NoCoin);
/// let outcome = machine.handle(Command::InsertCoin);
///
/// assert_eq!(outcome.entered, Some(CancelFlow::HasCoin));
/// assert_eq!(machine.current_state(), &CancelFlow::HasCoin);
/// ```
pub struct VendingMachine<S: Dispatch> {
    current: S,
    log: TransitionLog<S>,
}

impl<S: Dispatch> VendingMachine<S> {
    /// Create a machine in the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            log: TransitionLog::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is on the release path (pure)
    pub fn is_dispensing(&self) -> bool {
        self.current.is_dispensing()
    }

    /// Get the log of applied transitions (pure)
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Dispatch one command to the current state and apply the step.
    pub fn handle(&mut self, command: Command) -> Outcome<S> {
        debug!(
            state = self.current.name(),
            command = command.name(),
            "dispatching command"
        );

        let step = self.current.dispatch(command);
        match step.next {
            Some(next) => {
                info!(
                    from = self.current.name(),
                    to = next.name(),
                    command = command.name(),
                    "state change"
                );
                self.log = self.log.record(TransitionRecord {
                    from: self.current.clone(),
                    to: next.clone(),
                    timestamp: Utc::now(),
                });
                self.current = next.clone();
                Outcome {
                    reply: step.reply,
                    entered: Some(next),
                }
            }
            None => {
                debug!(
                    state = self.current.name(),
                    command = command.name(),
                    "command rejected"
                );
                Outcome {
                    reply: step.reply,
                    entered: None,
                }
            }
        }
    }
}
