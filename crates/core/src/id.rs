//! Numeric identifiers and the sequence that issues them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Positive, process-local identifier of an entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct EntityId(u64);

impl EntityId {
    /// The first identifier a fresh [`IdSequence`] hands out.
    pub const FIRST: EntityId = EntityId(1);

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for EntityId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(DomainError::invalid_id("identifier must be positive"));
        }
        Ok(Self(value))
    }
}

impl From<EntityId> for u64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("{s:?}: {e}")))?;
        Self::try_from(raw)
    }
}

/// Monotonic identifier source.
///
/// Starts at [`EntityId::FIRST`] and never hands out the same value twice,
/// even if the entity that held it is gone. `next` is always strictly greater
/// than every id issued or observed, so the last value of the range is never
/// handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: EntityId::FIRST.0 }
    }

    /// The value the next call to [`IdSequence::issue`] will return.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }

    /// Returns the current value and advances the sequence.
    pub fn issue(&mut self) -> DomainResult<EntityId> {
        let id = EntityId(self.next);
        self.next = successor(id)?;
        Ok(id)
    }

    /// Moves the sequence past `id` if it has not got there yet.
    ///
    /// Fails, leaving the sequence untouched, when nothing lies past `id`.
    pub fn observe(&mut self, id: EntityId) -> DomainResult<()> {
        if id.0 >= self.next {
            self.next = successor(id)?;
        }
        Ok(())
    }
}

fn successor(id: EntityId) -> DomainResult<u64> {
    id.0
        .checked_add(1)
        .ok_or_else(|| DomainError::conflict(format!("identifier space exhausted at {id}")))
}
