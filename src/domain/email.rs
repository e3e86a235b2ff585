//! Email value object.
//!
//! DDD: Immutable, self-validating address split into local and domain
//! parts. A failed construction returns an empty instance alongside the
//! notification; callers must check `has_errors()` before trusting the
//! fields. Changing a user's email means constructing a new instance and
//! swapping it in, never mutating this one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, MIN_EMAIL_DOMAIN_LENGTH};
use crate::domain::Notification;
use crate::errors::DomainError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validated email address.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Email {
    address: String,
    local: String,
    domain: String,
    verified: bool,
}

impl Email {
    /// Parse and validate a raw address.
    ///
    /// The input is trimmed first. All applicable format violations are
    /// collected in the returned notification; only the empty-address and
    /// missing-separator checks are terminal, since nothing after them is
    /// meaningful. The address is split at the *last* `@`.
    pub fn new(raw: &str) -> (Email, Notification) {
        let address = raw.trim();
        let notification = Self::validate(address);

        if notification.has_errors() {
            return (Email::default(), notification);
        }

        // validate() guarantees a separator at this point
        let at = match address.rfind('@') {
            Some(index) => index,
            None => return (Email::default(), notification),
        };

        let email = Email {
            address: address.to_string(),
            local: address[..at].to_string(),
            domain: address[at + 1..].to_string(),
            verified: false,
        };

        (email, notification)
    }

    fn validate(address: &str) -> Notification {
        let mut notification = Notification::new();

        if address.is_empty() {
            notification.add_error(DomainError::format("email address cannot be empty"));
            return notification;
        }

        let at = match address.rfind('@') {
            Some(index) => index,
            None => {
                notification.add_error(DomainError::format("invalid email format: '@' is missing"));
                return notification;
            }
        };

        if at == 0 || at == address.len() - 1 {
            notification.add_error(DomainError::format(
                "invalid email format: '@' is misplaced",
            ));
        }

        let local = &address[..at];
        let domain = &address[at + 1..];

        if local.is_empty() {
            notification.add_error(DomainError::format(
                "local part of the email must have at least one character",
            ));
        }

        if domain.len() < MIN_EMAIL_DOMAIN_LENGTH || !domain.contains('.') {
            notification.add_error(DomainError::format("domain part of the email is invalid"));
        }

        if !EMAIL_REGEX.is_match(address) {
            notification.add_error(DomainError::format(
                "email address does not match the required format",
            ));
        }

        notification
    }

    /// Full address, as trimmed at construction.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Part before the last `@`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Part after the last `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether the address has been explicitly verified.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Mark the address as verified. One-way; no precondition.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let (email, notification) = Email::new("test@example.com");

        assert!(!notification.has_errors());
        assert_eq!(email.address(), "test@example.com");
        assert_eq!(email.local(), "test");
        assert_eq!(email.domain(), "example.com");
        assert!(!email.is_verified());
    }

    #[test]
    fn test_trims_whitespace() {
        let (email, notification) = Email::new("  test@example.com  ");

        assert!(!notification.has_errors());
        assert_eq!(email.address(), "test@example.com");
    }

    #[test]
    fn test_empty_address_is_terminal() {
        let (_, notification) = Email::new("   ");

        assert_eq!(notification.count_errors(), 1);
        assert!(notification
            .to_string()
            .contains("email address cannot be empty"));
    }

    #[test]
    fn test_missing_separator_is_terminal() {
        let (_, notification) = Email::new("testemail.com");

        assert_eq!(notification.count_errors(), 1);
        assert!(notification
            .to_string()
            .contains("invalid email format: '@' is missing"));
    }

    #[test]
    fn test_separator_at_start() {
        let (email, notification) = Email::new("@example.com");

        assert_eq!(notification.count_errors(), 3);
        let rendered = notification.to_string();
        assert!(rendered.contains("invalid email format: '@' is misplaced"));
        assert!(rendered.contains("local part of the email must have at least one character"));
        assert!(rendered.contains("email address does not match the required format"));
        assert_eq!(email, Email::default());
    }

    #[test]
    fn test_separator_at_end() {
        let (_, notification) = Email::new("test@");

        assert_eq!(notification.count_errors(), 3);
        let rendered = notification.to_string();
        assert!(rendered.contains("invalid email format: '@' is misplaced"));
        assert!(rendered.contains("domain part of the email is invalid"));
        assert!(rendered.contains("email address does not match the required format"));
    }

    #[test]
    fn test_domain_without_dot() {
        let (_, notification) = Email::new("test@example");

        assert_eq!(notification.count_errors(), 2);
        let rendered = notification.to_string();
        assert!(rendered.contains("domain part of the email is invalid"));
        assert!(rendered.contains("email address does not match the required format"));
    }

    #[test]
    fn test_single_letter_tld_fails_pattern_only() {
        let (_, notification) = Email::new("test@e.c");

        assert_eq!(notification.count_errors(), 1);
        assert!(notification
            .to_string()
            .contains("email address does not match the required format"));
    }

    #[test]
    fn test_multiple_separators_split_at_last() {
        let (_, notification) = Email::new("test@example@domain.com");

        // local "test@example" survives the structural checks but not the
        // conservative pattern
        assert_eq!(notification.count_errors(), 1);
        assert!(notification
            .to_string()
            .contains("email address does not match the required format"));
    }

    #[test]
    fn test_mark_verified() {
        let (mut email, _) = Email::new("test@example.com");
        assert!(!email.is_verified());

        email.mark_verified();

        assert!(email.is_verified());
    }

    #[test]
    fn test_failed_construction_returns_empty_fields() {
        let (email, notification) = Email::new("nope");

        assert!(notification.has_errors());
        assert_eq!(email.address(), "");
        assert_eq!(email.local(), "");
        assert_eq!(email.domain(), "");
    }
}
