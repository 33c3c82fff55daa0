//! Confirmation capability for bulk operations.
//!
//! Randomizing and clearing are gated on an operator "yes". The engine
//! never prompts by itself: callers pass in something that answers the
//! question. A terminal modal, a script flag, or a closure in a test all
//! work the same way.

use std::fmt;

/// The bulk operation awaiting confirmation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RandomizeRemaining,
    ClearAll,
}

impl ConfirmAction {
    /// Question shown to the operator.
    pub fn prompt(self) -> &'static str {
        match self {
            ConfirmAction::RandomizeRemaining => "Randomize remaining seats?",
            ConfirmAction::ClearAll => "Clear all seats?",
        }
    }
}

impl fmt::Display for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

/// Answers a confirmation request. `false` means the operation is skipped.
pub trait Confirm {
    fn confirm(&mut self, action: ConfirmAction) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(ConfirmAction) -> bool,
{
    fn confirm(&mut self, action: ConfirmAction) -> bool {
        self(action)
    }
}

/// Always says yes. Used once the UI has already collected the answer.
#[derive(Debug, Default, Copy, Clone)]
pub struct Approve;

impl Confirm for Approve {
    fn confirm(&mut self, _action: ConfirmAction) -> bool {
        true
    }
}

/// Always says no.
#[derive(Debug, Default, Copy, Clone)]
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&mut self, _action: ConfirmAction) -> bool {
        false
    }
}
