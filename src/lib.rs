//! Account domain core.
//!
//! A library-level contract for a user account aggregate built around
//! self-validating value objects and notification-based error
//! accumulation: instead of failing fast, every constructing or mutating
//! operation collects all violated invariants into a
//! [`Notification`] and lets the caller decide.
//!
//! # Architecture
//!
//! - **constants**: Business-rule constants (roles, password policy, email pattern)
//! - **domain**: The [`User`] aggregate and [`Email`]/[`Password`] value objects
//! - **errors**: The [`DomainError`] failure taxonomy
//!
//! # Example
//!
//! ```
//! use account_core::User;
//!
//! let (user, notification) = User::new("alice", "alice@example.com", "Str0ng!Pass", "standard");
//! assert!(!notification.has_errors());
//! assert!(!user.is_active());
//! ```

pub mod constants;
pub mod domain;
pub mod errors;

// Re-export commonly used types at crate root
pub use domain::{ActivationStampPolicy, Email, Notification, Password, Role, User, UserSnapshot};
pub use errors::DomainError;
