//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Default role assigned to new users
pub const ROLE_STANDARD: &str = "standard";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STANDARD];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Punctuation characters accepted as the required password symbol
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

// =============================================================================
// Email Validation
// =============================================================================

/// Minimum length of the domain part of an email address
pub const MIN_EMAIL_DOMAIN_LENGTH: usize = 3;

/// Conservative full-address pattern: local characters, one separator,
/// domain characters, and a TLD of at least two letters
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
