//! Notification - ordered accumulation of validation failures.
//!
//! DDD: every validating operation reports all violated invariants at once
//! instead of failing fast on the first. The notification is the sole error
//! channel of the domain layer; a caller checks `has_errors()` to decide
//! whether to trust the new state.

use std::fmt;

use crate::errors::DomainError;

/// Ordered multi-error container.
///
/// Each call owns its own instance; notifications are never shared across
/// callers or stored globally. Insertion order is preserved and duplicates
/// are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<DomainError>,
}

impl Notification {
    /// Create an empty notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one failure. Never fails.
    pub fn add_error(&mut self, err: DomainError) {
        self.errors.push(err);
    }

    /// Append all of `other`'s errors, in order, leaving `other` unchanged.
    pub fn merge(&mut self, other: &Notification) {
        self.errors.extend_from_slice(&other.errors);
    }

    /// True iff at least one error has been collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of collected errors.
    pub fn count_errors(&self) -> usize {
        self.errors.len()
    }

    /// Read-only view of the collected errors, in insertion order.
    pub fn errors(&self) -> &[DomainError] {
        &self.errors
    }

    /// Reset to empty so the instance can be reused across independent checks.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.errors {
            writeln!(f, "{err}")?;
        }
        Ok(())
    }
}
