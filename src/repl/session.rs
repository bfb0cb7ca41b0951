//! Sessions: what a console token means for each demo.

use crate::core::{Command, State};
use crate::machine::{Dispatch, VendingMachine};
use crate::scanner::{extract_strings, find_divisions};
use crate::strategy::Animal;
use crate::vending::{CancelFlow, TakeFlow};
use tracing::debug;

/// One demo behind the console loop.
///
/// `answer` turns a trimmed token into the lines to print. An empty
/// answer prints nothing, which is how unrecognized tokens are dropped
/// without a message.
pub trait Session {
    /// Answer one token with zero or more output lines.
    fn answer(&mut self, token: &str) -> Vec<String>;
}

/// A vending machine behind its token alphabet.
pub struct VendingSession<S: Dispatch> {
    machine: VendingMachine<S>,
    commands: fn(&str) -> Option<Command>,
}

impl<S: Dispatch> VendingSession<S> {
    /// Wrap a machine starting at `initial` with a token alphabet.
    pub fn new(initial: S, commands: fn(&str) -> Option<Command>) -> Self {
        Self {
            machine: VendingMachine::new(initial),
            commands,
        }
    }

    /// The machine being driven.
    pub fn machine(&self) -> &VendingMachine<S> {
        &self.machine
    }
}

impl VendingSession<CancelFlow> {
    /// Cancel-flow session: tokens `i`, `r`, `s`, `c`.
    pub fn cancel_flow() -> Self {
        Self::new(CancelFlow::NoCoin, CancelFlow::command_for)
    }
}

impl VendingSession<TakeFlow> {
    /// Take-flow session: tokens `i`, `r`, `s`, `t`.
    pub fn take_flow() -> Self {
        Self::new(TakeFlow::NoCoin, TakeFlow::command_for)
    }
}

impl<S: Dispatch> Session for VendingSession<S> {
    fn answer(&mut self, token: &str) -> Vec<String> {
        let Some(command) = (self.commands)(token) else {
            debug!(token, "ignoring unrecognized token");
            return Vec::new();
        };

        let outcome = self.machine.handle(command);
        let mut lines = Vec::new();
        if let Some(reply) = outcome.reply {
            lines.push(reply.to_string());
        }
        if let Some(entered) = outcome.entered {
            lines.push(format!("state change: {}", entered.name()));
        }
        lines
    }
}

/// The three preset animals behind their `f`/`w` tokens.
pub struct MenagerieSession {
    ostrich: Animal,
    eagle: Animal,
    lion: Animal,
}

impl MenagerieSession {
    pub fn new() -> Self {
        Self {
            ostrich: Animal::ostrich(),
            eagle: Animal::eagle(),
            lion: Animal::lion(),
        }
    }
}

impl Default for MenagerieSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MenagerieSession {
    fn answer(&mut self, token: &str) -> Vec<String> {
        let line = match token {
            "f1" => self.ostrich.fly(),
            "w1" => self.ostrich.walk(),
            "f2" => self.eagle.fly(),
            "w2" => self.eagle.walk(),
            "f3" => self.lion.fly(),
            "w3" => self.lion.walk(),
            _ => {
                debug!(token, "ignoring unrecognized token");
                return Vec::new();
            }
        };
        vec![line.to_string()]
    }
}

/// Scans each input line for division operators and string literals.
///
/// Scanner state does not carry across lines; every line is scanned
/// from the start of code.
#[derive(Default)]
pub struct ScanSession;

impl Session for ScanSession {
    fn answer(&mut self, line: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for index in find_divisions(line) {
            lines.push(format!("division at {index}"));
        }
        for literal in extract_strings(line) {
            lines.push(format!("string: {literal}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vending_session_ignores_foreign_recovery_token() {
        let mut session = VendingSession::cancel_flow();
        assert!(session.answer("t").is_empty());
        assert_eq!(session.machine().current_state(), &CancelFlow::NoCoin);
    }

    #[test]
    fn vending_session_announces_transitions() {
        let mut session = VendingSession::cancel_flow();
        assert_eq!(session.answer("i"), vec!["state change: HasCoin"]);
    }

    #[test]
    fn vending_session_prints_reply_before_notice() {
        let mut session = VendingSession::cancel_flow();
        session.answer("i");
        assert_eq!(
            session.answer("r"),
            vec!["returning your coin", "state change: NoCoin"]
        );
    }

    #[test]
    fn take_session_uses_take_token() {
        let mut session = VendingSession::take_flow();
        session.answer("i");
        session.answer("s");
        assert_eq!(
            session.answer("t"),
            vec!["item taken", "state change: NoCoin"]
        );
        assert!(session.answer("c").is_empty());
    }

    #[test]
    fn menagerie_answers_per_animal() {
        let mut session = MenagerieSession::new();
        assert_eq!(session.answer("f1"), vec!["No Way! I can't fly."]);
        assert_eq!(session.answer("f2"), vec!["Yes! I can fly."]);
        assert_eq!(session.answer("w3"), vec!["Walking with four foot..."]);
        assert!(session.answer("f4").is_empty());
    }

    #[test]
    fn scan_session_reports_divisions_then_strings() {
        let mut session = ScanSession;
        assert_eq!(
            session.answer(r#"x = 1/2; s = "hi";"#),
            vec!["division at 5", "string: hi"]
        );
        assert!(session.answer("nothing here").is_empty());
    }
}
