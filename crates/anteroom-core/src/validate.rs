//! Field validation for the signup form.
//!
//! Checks run in a fixed order and the first failure wins; the UI maps
//! each failure to its message, highlight, and focus target.

use std::sync::LazyLock;

use regex::Regex;

/// Passwords at or above this length are rejected.
///
/// Inherited business rule: the form caps password length rather than
/// enforcing a minimum. Kept as-is for compatibility with the existing
/// account flow.
pub const MAX_PASSWORD_LEN: usize = 8;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Values read from the login form at submit time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Values read from the signup form at submit time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Why a signup submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    PasswordTooLong,
    MissingFields,
    InvalidEmail,
    EmptyPassword,
}

impl SignupError {
    /// Inline message shown for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            SignupError::PasswordTooLong => "Password must be less than 8 characters",
            SignupError::MissingFields => "Please fill in all fields",
            SignupError::InvalidEmail => "Please enter a valid email address",
            SignupError::EmptyPassword => "Please enter a password",
        }
    }

    /// Which field should regain focus after the rejection, if any.
    pub fn focus(self) -> Option<SignupField> {
        match self {
            SignupError::PasswordTooLong | SignupError::EmptyPassword => {
                Some(SignupField::Password)
            }
            SignupError::InvalidEmail => Some(SignupField::Email),
            SignupError::MissingFields => None,
        }
    }
}

/// Signup form fields, used for focus targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
}

/// Returns true if the string looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validates a signup profile.
///
/// Name and email fields are compared after trimming; the password is
/// taken verbatim. The length check runs first, before anything else
/// is looked at.
pub fn validate_signup(profile: &SignupProfile) -> Result<(), SignupError> {
    if profile.password.chars().count() >= MAX_PASSWORD_LEN {
        return Err(SignupError::PasswordTooLong);
    }

    let first_name = profile.first_name.trim();
    let last_name = profile.last_name.trim();
    let email = profile.email.trim();

    if first_name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
        || profile.password.is_empty()
    {
        return Err(SignupError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(SignupError::InvalidEmail);
    }

    // Unreachable after the missing-fields check.
    if profile.password.is_empty() {
        return Err(SignupError::EmptyPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str, email: &str, password: &str) -> SignupProfile {
        SignupProfile {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_profile() {
        let p = profile("Ada", "Lovelace", "ada@example.com", "abc123!");
        assert_eq!(validate_signup(&p), Ok(()));
    }

    #[test]
    fn long_password_is_rejected_before_anything_else() {
        // Every other field is invalid too; the length rule still wins.
        let p = profile("", "", "not-an-email", "abcdefgh");
        assert_eq!(validate_signup(&p), Err(SignupError::PasswordTooLong));
    }

    #[test]
    fn seven_character_password_passes_the_length_check() {
        let p = profile("Ada", "Lovelace", "ada@example.com", "abcdefg");
        assert_eq!(validate_signup(&p), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected_after_trimming() {
        let p = profile("  ", "Lovelace", "ada@example.com", "abc123!");
        assert_eq!(validate_signup(&p), Err(SignupError::MissingFields));
    }

    #[test]
    fn empty_password_reports_missing_fields() {
        // Step 4 of the chain never fires; step 2 catches it first.
        let p = profile("Ada", "Lovelace", "ada@example.com", "");
        assert_eq!(validate_signup(&p), Err(SignupError::MissingFields));
    }

    #[test]
    fn bad_email_is_rejected_with_focus_target() {
        let p = profile("Ada", "Lovelace", "ada@example", "abc123!");
        let err = validate_signup(&p).expect_err("should reject");
        assert_eq!(err, SignupError::InvalidEmail);
        assert_eq!(err.focus(), Some(SignupField::Email));
    }

    #[test]
    fn email_pattern_edges() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
    }
}
