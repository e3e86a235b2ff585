//! User aggregate and related types.
//!
//! DDD: the aggregate is the unit of invariant enforcement. Every mutator
//! re-validates and returns a [`Notification`]; construction soft-fails,
//! returning the (possibly invalid) instance together with everything that
//! is wrong with it, so callers can surface the complete list at once.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_STANDARD};
use crate::domain::{Email, Notification, Password};
use crate::errors::DomainError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Standard,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Standard => ROLE_STANDARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_STANDARD => Ok(Role::Standard),
            _ => Err(DomainError::field("invalid role")),
        }
    }
}

/// When the activation timestamp must be present.
///
/// The two source revisions of this rule disagree, so it is a policy on the
/// aggregate rather than a hard-coded choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivationStampPolicy {
    /// Stamped by `activate()`; required only while the user is active.
    #[default]
    OnActivate,
    /// Stamped at construction and required from then on.
    OnCreate,
}

/// User aggregate root.
///
/// Owns its [`Email`] and [`Password`] exclusively; "changing" either means
/// constructing a new value object and swapping it in only when it carries
/// no errors. The activation flag is a two-state machine starting at
/// inactive.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    username: String,
    email: Email,
    password: Password,
    role: Role,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    activated_at: Option<DateTime<Utc>>,
    stamp_policy: ActivationStampPolicy,
}

impl User {
    /// Construct a user under the default activation-stamp policy.
    ///
    /// Never panics: the returned notification carries every violated
    /// invariant (password policy first, then email format, then field
    /// checks) and the instance is returned regardless, for inspection.
    pub fn new(
        username: &str,
        email_address: &str,
        plain_password: &str,
        role: &str,
    ) -> (User, Notification) {
        Self::with_policy(
            username,
            email_address,
            plain_password,
            role,
            ActivationStampPolicy::default(),
        )
    }

    /// Construct a user with an explicit activation-stamp policy.
    pub fn with_policy(
        username: &str,
        email_address: &str,
        plain_password: &str,
        role: &str,
        policy: ActivationStampPolicy,
    ) -> (User, Notification) {
        let (password, mut notification) = Password::new(plain_password);
        let (email, email_notification) = Email::new(email_address);
        notification.merge(&email_notification);

        let role = match Role::from_str(role) {
            Ok(role) => role,
            Err(err) => {
                notification.add_error(err);
                Role::Standard
            }
        };

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email,
            password,
            role,
            is_active: false,
            created_at: now,
            updated_at: now,
            activated_at: match policy {
                ActivationStampPolicy::OnActivate => None,
                ActivationStampPolicy::OnCreate => Some(now),
            },
            stamp_policy: policy,
        };

        notification.merge(&user.validate());

        (user, notification)
    }

    /// Field-invariant checks shared by construction and every mutator.
    ///
    /// Always returns, never halts; the role and the timestamps other than
    /// the activation stamp cannot go invalid once constructed, so only the
    /// invariants that can actually vary are re-checked here.
    fn validate(&self) -> Notification {
        let mut notification = Notification::new();

        if self.username.trim().is_empty() {
            notification.add_error(DomainError::field("username cannot be empty"));
        }

        let stamp_required = match self.stamp_policy {
            ActivationStampPolicy::OnActivate => self.is_active,
            ActivationStampPolicy::OnCreate => true,
        };
        if stamp_required && self.activated_at.is_none() {
            notification.add_error(DomainError::field("activation date cannot be zero"));
        }

        notification
    }

    /// Set the username and report re-validation.
    ///
    /// The field is updated even when validation then fails; the
    /// notification is observational for this field, unlike the email and
    /// password swaps which are gated.
    pub fn change_username(&mut self, username: &str) -> Notification {
        self.username = username.to_string();
        self.updated_at = Utc::now();
        self.validate()
    }

    /// Set the role from its string form.
    ///
    /// An out-of-set value is reported as "invalid role" and the stored
    /// role keeps its previous value.
    pub fn change_role(&mut self, role: &str) -> Notification {
        let mut notification = Notification::new();
        match Role::from_str(role) {
            Ok(role) => self.role = role,
            Err(err) => notification.add_error(err),
        }
        self.updated_at = Utc::now();
        notification.merge(&self.validate());
        notification
    }

    /// Swap in a new email address.
    ///
    /// Construction errors short-circuit: the aggregate is left untouched
    /// and the new address's notification is returned as-is.
    pub fn change_email(&mut self, email_address: &str) -> Notification {
        let (email, notification) = Email::new(email_address);

        if notification.has_errors() {
            return notification;
        }

        tracing::info!(
            user_id = %self.id,
            old = self.email.address(),
            new = email.address(),
            "email changed"
        );
        self.email = email;
        self.updated_at = Utc::now();
        self.validate()
    }

    /// Swap in a new password; same short-circuit contract as
    /// [`change_email`](Self::change_email).
    pub fn change_password(&mut self, plain_password: &str) -> Notification {
        let (password, notification) = Password::new(plain_password);

        if notification.has_errors() {
            return notification;
        }

        tracing::info!(user_id = %self.id, "password changed");
        self.password = password;
        self.updated_at = Utc::now();
        self.validate()
    }

    /// Transition inactive → active and stamp the activation time.
    ///
    /// A second activation is reported and leaves all state untouched.
    pub fn activate(&mut self) -> Notification {
        let mut notification = Notification::new();

        if self.is_active {
            notification.add_error(DomainError::state("user is already active"));
            return notification;
        }

        self.is_active = true;
        self.activated_at = Some(Utc::now());
        tracing::debug!(user_id = %self.id, "user activated");
        notification.merge(&self.validate());
        notification
    }

    /// Transition active → inactive.
    ///
    /// Deactivating an inactive user is reported and leaves all state
    /// untouched.
    pub fn deactivate(&mut self) -> Notification {
        let mut notification = Notification::new();

        if !self.is_active {
            notification.add_error(DomainError::state("user is already deactivated"));
            return notification;
        }

        self.is_active = false;
        self.updated_at = Utc::now();
        tracing::debug!(user_id = %self.id, "user deactivated");
        notification.merge(&self.validate());
        notification
    }

    /// Liveness heartbeat: refresh the activation and update stamps without
    /// touching the active flag.
    pub fn update_active_at(&mut self) -> Notification {
        let now = Utc::now();
        self.activated_at = Some(now);
        self.updated_at = now;
        self.validate()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn activated_at(&self) -> Option<DateTime<Utc>> {
        self.activated_at
    }

    /// Read projection safe to hand outward: never carries the hash.
    pub fn snapshot(&self) -> UserSnapshot {
        self.into()
    }
}

/// User snapshot (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.address().to_string(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            activated_at: user.activated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("standard".parse::<Role>().unwrap(), Role::Standard);
        assert!("99".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_and_admin_check() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Standard.to_string(), "standard");
        assert!(Role::Admin.is_admin());
        assert!(!Role::Standard.is_admin());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"standard\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"admin\"").unwrap(),
            Role::Admin
        );
    }
}
