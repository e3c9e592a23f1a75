//! The yes/no decision that gates record removal.

use roster_types::UserRecord;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// Asked once per remove request. `true` lets the removal proceed.
pub trait Confirm {
    fn confirm(&mut self, record: &UserRecord) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&UserRecord) -> bool,
{
    fn confirm(&mut self, record: &UserRecord) -> bool {
        self(record)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(UserRecord),
    Kept,
}
