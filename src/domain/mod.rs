//! Domain layer - core business entities and value objects.
//!
//! This module contains pure domain logic with no infrastructure
//! dependencies. Validation failures are accumulated in a [`Notification`]
//! rather than raised, so every operation reports the full set of violated
//! invariants at once.
//!
//! DDD: Contains the [`User`] aggregate and the [`Email`] and [`Password`]
//! value objects.

pub mod email;
pub mod notification;
pub mod password;
pub mod user;

pub use email::Email;
pub use notification::Notification;
pub use password::Password;
pub use user::{ActivationStampPolicy, Role, User, UserSnapshot};
