//! Field-level validation rules for user administration.
//!
//! Rules are pure functions over a single field value. [`super::UserFields`]
//! applies them in the fixed order name, email, phone, rule level and stops
//! at the first failure.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::RuleLevel;
use crate::domain::Error;

/// Maximum number of characters in a user name.
pub const USER_NAME_MAX: usize = 32;
/// Maximum number of characters in an email address.
pub const EMAIL_MAX: usize = 254;

static USER_NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validation regex {pattern} failed to compile: {error}"))
    })
}

fn user_name_regex() -> &'static Regex {
    compiled(&USER_NAME_RE, r"^[A-Za-z0-9_.\- ]+$")
}

fn email_regex() -> &'static Regex {
    compiled(&EMAIL_RE, r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
}

fn phone_regex() -> &'static Regex {
    compiled(&PHONE_RE, r"^\+?[0-9]{5,20}$")
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("user name must not be empty")]
    EmptyName,
    #[error("user name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("user name may only contain letters, digits, spaces, dots, dashes and underscores")]
    InvalidName,
    #[error("user email format is invalid")]
    InvalidEmail,
    #[error("user phone format is invalid")]
    InvalidPhone,
    #[error("rule level {value} is not a known level")]
    InvalidRuleLevel { value: i32 },
}

impl UserValidationError {
    /// Request field the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } | Self::InvalidName => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::InvalidRuleLevel { .. } => "ruleLevel",
        }
    }

    /// Stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::NameTooLong { .. } => "name_too_long",
            Self::InvalidName => "invalid_name",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidRuleLevel { .. } => "invalid_rule_level",
        }
    }
}

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        Error::validation_failed(value.field(), value.code(), value.to_string())
    }
}

/// Reject empty, overlong, or badly formed names.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    if name.chars().count() > USER_NAME_MAX {
        return Err(UserValidationError::NameTooLong {
            max: USER_NAME_MAX,
        });
    }
    if name.trim() != name || !user_name_regex().is_match(name) {
        return Err(UserValidationError::InvalidName);
    }
    Ok(())
}

/// Email is optional; a non-empty value must look like an address.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    if email.chars().count() > EMAIL_MAX || !email_regex().is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }
    Ok(())
}

/// Phone is optional; a non-empty value must be 5-20 digits with an
/// optional leading `+`.
pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    if phone.is_empty() || phone_regex().is_match(phone) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidPhone)
    }
}

/// Accept only the integers of the [`RuleLevel`] enumeration.
pub fn validate_rule_level(value: i32) -> Result<RuleLevel, UserValidationError> {
    match value {
        0 => Ok(RuleLevel::Low),
        1 => Ok(RuleLevel::Medium),
        2 => Ok(RuleLevel::High),
        other => Err(UserValidationError::InvalidRuleLevel { value: other }),
    }
}
