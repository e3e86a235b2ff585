//! Domain-level errors.
//!
//! These errors represent business rule violations collected by a
//! [`Notification`](crate::domain::Notification); the domain types never
//! panic or return `Err` for expected validation conditions.

use thiserror::Error;

/// Domain error, one variant per failure class.
///
/// The display form is the bare message: notifications render these
/// verbatim for end users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed value-object input (email format rules)
    #[error("{0}")]
    Format(String),

    /// Complexity policy violation (password rules)
    #[error("{0}")]
    Policy(String),

    /// Aggregate field invariant violation (username, role, timestamps)
    #[error("{0}")]
    Field(String),

    /// Invalid state transition (double activation/deactivation)
    #[error("{0}")]
    State(String),

    /// Infrastructure failure surfaced through the notification channel
    /// (password hashing)
    #[error("{0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        DomainError::Format(msg.into())
    }

    /// Create a policy error
    pub fn policy(msg: impl Into<String>) -> Self {
        DomainError::Policy(msg.into())
    }

    /// Create a field error
    pub fn field(msg: impl Into<String>) -> Self {
        DomainError::Field(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        DomainError::State(msg.into())
    }

    /// Create an infrastructure error
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        DomainError::Infrastructure(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = DomainError::field("username cannot be empty");
        assert_eq!(err.to_string(), "username cannot be empty");

        let err = DomainError::state("user is already active");
        assert_eq!(err.to_string(), "user is already active");
    }
}
