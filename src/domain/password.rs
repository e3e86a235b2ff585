//! Password value object - domain layer password handling.
//!
//! DDD: Encapsulates the complexity policy and one-way hashing as a value
//! object. The plaintext is validated, hashed, and discarded inside
//! construction; only the Argon2 PHC string survives.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};
use crate::domain::Notification;
use crate::errors::DomainError;

/// Hashed password.
///
/// `salt` is always empty: the PHC hash string embeds its own salt. The
/// accessor is kept so storage code never has to special-case the format.
#[derive(Default, Clone)]
pub struct Password {
    hash: String,
    salt: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate a plaintext against the complexity policy, then hash it.
    ///
    /// The empty check is terminal; the remaining policy violations are all
    /// collected. A hashing failure is reported through the notification as
    /// well, never as a panic, so every construction path returns the same
    /// shape. On any error the returned instance is empty.
    pub fn new(plain_text: &str) -> (Password, Notification) {
        let mut notification = Self::validate(plain_text);

        if notification.has_errors() {
            return (Password::default(), notification);
        }

        match Self::hash_plain_text(plain_text) {
            Ok(hash) => (
                Password {
                    hash,
                    salt: String::new(),
                },
                notification,
            ),
            Err(err) => {
                tracing::error!("password hashing failed: {err}");
                notification.add_error(DomainError::infrastructure(format!(
                    "password hashing failed: {err}"
                )));
                (Password::default(), notification)
            }
        }
    }

    fn validate(plain_text: &str) -> Notification {
        let mut notification = Notification::new();

        if plain_text.trim().is_empty() {
            notification.add_error(DomainError::policy("Password cannot be empty"));
            return notification;
        }

        if plain_text.len() < MIN_PASSWORD_LENGTH {
            notification.add_error(DomainError::policy(
                "Password must be at least 8 characters long",
            ));
        }

        if !plain_text.chars().any(|c| c.is_ascii_uppercase()) {
            notification.add_error(DomainError::policy(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !plain_text.chars().any(|c| c.is_ascii_lowercase()) {
            notification.add_error(DomainError::policy(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !plain_text.chars().any(|c| c.is_ascii_digit()) {
            notification.add_error(DomainError::policy(
                "Password must contain at least one number",
            ));
        }

        if !plain_text.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            notification.add_error(DomainError::policy(
                "Password must contain at least one special character",
            ));
        }

        notification
    }

    fn hash_plain_text(plain_text: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(plain_text.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a candidate plaintext against the stored hash.
    ///
    /// Constant-time via Argon2 verification; returns false on any mismatch
    /// or on an unparseable hash, never panics.
    pub fn check(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// The stored hash string.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Always empty; see the type docs.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Trivially true for any constructed instance; kept for interface
    /// symmetry with `Email::is_verified`.
    pub fn is_valid(&self) -> bool {
        true
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
