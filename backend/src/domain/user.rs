//! User aggregate and its validated field types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::UserValidationError;
use validation::{validate_email, validate_name, validate_phone, validate_rule_level};

/// Storage-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw storage id.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw value as stored in the `users.id` column.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Alerting rule level a user subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum RuleLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl TryFrom<i32> for RuleLevel {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        validate_rule_level(value)
    }
}

impl From<RuleLevel> for i32 {
    fn from(value: RuleLevel) -> Self {
        match value {
            RuleLevel::Low => 0,
            RuleLevel::Medium => 1,
            RuleLevel::High => 2,
        }
    }
}

macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $rule:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap the raw value.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                let value = value.into();
                $rule(&value)?;
                Ok(Self(value))
            }

            /// Borrow the validated value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

validated_string!(
    /// Unique, pattern-constrained user name.
    UserName,
    validate_name
);
validated_string!(
    /// Optional email address; empty means "not set".
    Email,
    validate_email
);
validated_string!(
    /// Optional phone number; empty means "not set".
    Phone,
    validate_phone
);

impl Email {
    /// `true` when no address is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Phone {
    /// `true` when no number is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw, unvalidated values for every mutable user field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub enable_email: bool,
    pub phone: String,
    pub enable_phone: bool,
    pub universal: bool,
    pub rule_level: i32,
}

impl UserFields {
    /// Run the validation rules in order: name, email, phone, rule level.
    ///
    /// The first violation is returned and later rules are not evaluated.
    ///
    /// # Examples
    /// ```
    /// use admin_backend::domain::{UserFields, UserValidationError};
    ///
    /// let fields = UserFields {
    ///     name: String::new(),
    ///     email: "not-an-email".into(),
    ///     enable_email: true,
    ///     phone: String::new(),
    ///     enable_phone: true,
    ///     universal: false,
    ///     rule_level: 0,
    /// };
    /// assert_eq!(fields.validate(), Err(UserValidationError::EmptyName));
    /// ```
    pub fn validate(self) -> Result<UserDraft, UserValidationError> {
        let name = UserName::new(self.name)?;
        let email = Email::new(self.email)?;
        let phone = Phone::new(self.phone)?;
        let rule_level = RuleLevel::try_from(self.rule_level)?;
        Ok(UserDraft {
            name,
            email,
            enable_email: self.enable_email,
            phone,
            enable_phone: self.enable_phone,
            universal: self.universal,
            rule_level,
        })
    }
}

/// Validated values for every mutable user field, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: UserName,
    pub email: Email,
    pub enable_email: bool,
    pub phone: Phone,
    pub enable_phone: bool,
    pub universal: bool,
    pub rule_level: RuleLevel,
}

/// Persisted user.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
/// - `name` is unique across all users (enforced by storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    enable_email: bool,
    phone: Phone,
    enable_phone: bool,
    universal: bool,
    rule_level: RuleLevel,
}

impl User {
    /// Combine a storage-assigned id with validated fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            name,
            email,
            enable_email,
            phone,
            enable_phone,
            universal,
            rule_level,
        } = draft;
        Self {
            id,
            name,
            email,
            enable_email,
            phone,
            enable_phone,
            universal,
            rule_level,
        }
    }

    /// Replace every mutable field with `draft`; nothing is carried over.
    pub fn replace_fields(&mut self, draft: UserDraft) {
        *self = Self::new(self.id, draft);
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique user name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address; may be empty.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Whether email notifications are enabled.
    #[must_use]
    pub fn enable_email(&self) -> bool {
        self.enable_email
    }

    /// Phone number; may be empty.
    #[must_use]
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Whether phone notifications are enabled.
    #[must_use]
    pub fn enable_phone(&self) -> bool {
        self.enable_phone
    }

    /// Universal users see every project, not only associated ones.
    #[must_use]
    pub fn universal(&self) -> bool {
        self.universal
    }

    /// Alerting rule level the user subscribes to.
    #[must_use]
    pub fn rule_level(&self) -> RuleLevel {
        self.rule_level
    }
}

#[cfg(test)]
mod tests;
