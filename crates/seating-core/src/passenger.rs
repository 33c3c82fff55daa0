//! Passengers and the fixed roster.
//!
//! The roster is seeded once per session and never changes. Its order
//! is significant: the waitlist and the auto-fill both walk passengers
//! in roster order.

use std::fmt;

use indexmap::IndexSet;

use crate::error::SeatingError;

/// Opaque passenger handle: the passenger's position in the roster.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassengerId(u32);

impl PassengerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered set of unique passenger display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: IndexSet<String>,
}

impl Roster {
    /// Build a roster from display names, in order.
    ///
    /// Names are trimmed. Blank names and duplicates are rejected, since
    /// the waitlist and the scripts identify passengers by name.
    pub fn new<I, S>(names: I) -> Result<Self, SeatingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = IndexSet::new();
        for (index, raw) in names.into_iter().enumerate() {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(SeatingError::BlankPassengerName { index });
            }
            if !set.insert(name.to_string()) {
                return Err(SeatingError::DuplicatePassenger(name.to_string()));
            }
        }
        Ok(Roster { names: set })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name for a passenger, if it belongs to this roster.
    pub fn name(&self, id: PassengerId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    /// Look a passenger up by exact display name (surrounding whitespace ignored).
    pub fn find(&self, name: &str) -> Option<PassengerId> {
        self.names
            .get_index_of(name.trim())
            .map(|i| PassengerId(i as u32))
    }

    /// Like [`Roster::find`], but fails with `UnknownPassenger`.
    pub fn require(&self, name: &str) -> Result<PassengerId, SeatingError> {
        self.find(name)
            .ok_or_else(|| SeatingError::UnknownPassenger(name.trim().to_string()))
    }

    pub fn contains(&self, id: PassengerId) -> bool {
        id.index() < self.names.len()
    }

    /// All passenger ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.names.len()).map(|i| PassengerId(i as u32))
    }

    /// `(id, name)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (PassengerId(i as u32), name.as_str()))
    }
}
