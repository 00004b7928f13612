//! Domain error taxonomy.
//!
//! Every user-administration operation terminates with either a success
//! payload or exactly one [`Error`]. The set of [`ErrorCode`]s is closed;
//! inbound adapters translate each code into a transport status and never
//! invent new ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::TraceId;

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input: unparsable path identifier or request body.
    BadRequest,
    /// A field-level validation rule rejected the input.
    ValidationFailed,
    /// The requested resource does not exist.
    NotFound,
    /// Storage rejected a write because a required column was empty.
    NotNullViolation,
    /// Storage rejected a write because a unique value already exists.
    UniqueViolation,
    /// Storage rejected a write because the primary key already exists.
    PrimaryKeyViolation,
    /// Any other storage or transport failure.
    InternalError,
}

/// Resource kinds referenced by not-found and bad-identifier errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Project,
}

impl ResourceKind {
    /// Lowercase name used in messages and details.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload returned to callers.
///
/// `message` for [`ErrorCode::InternalError`] holds the underlying cause for
/// server-side diagnostics; adapters must redact it before it leaves the
/// process.
///
/// # Examples
/// ```
/// use admin_backend::domain::{Error, ErrorCode, ResourceKind};
///
/// let err = Error::not_found(ResourceKind::User);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "user not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier, replacing any captured one.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use admin_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::bad_request("bad").with_details(json!({ "field": "id" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Malformed request body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Unparsable identifier scoped to `resource`.
    pub fn invalid_id(resource: ResourceKind) -> Self {
        Self::bad_request(format!("invalid {resource} id"))
            .with_details(json!({ "field": "id", "resource": resource.as_str() }))
    }

    /// A validation rule rejected `field` with the stable `reason` code.
    pub fn validation_failed(
        field: &'static str,
        reason: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
            .with_details(json!({ "field": field, "code": reason }))
    }

    pub fn not_found(resource: ResourceKind) -> Self {
        Self::new(ErrorCode::NotFound, format!("{resource} not found"))
            .with_details(json!({ "resource": resource.as_str() }))
    }

    /// Storage rejected an empty required column.
    pub fn not_null_violation(column: Option<&str>) -> Self {
        let error = Self::new(ErrorCode::NotNullViolation, "null value");
        match column {
            Some(column) => error.with_details(json!({ "column": column })),
            None => error,
        }
    }

    /// Storage rejected a duplicate value for `field`. An empty `field` means
    /// the constraint could not be attributed to a column.
    pub fn unique_violation(field: &str) -> Self {
        let message = match field {
            "" => return Self::new(ErrorCode::UniqueViolation, "duplicate value"),
            "name" => "duplicate user name".to_owned(),
            other => format!("duplicate value for {other}"),
        };
        Self::new(ErrorCode::UniqueViolation, message).with_details(json!({ "field": field }))
    }

    pub fn primary_key_violation() -> Self {
        Self::new(ErrorCode::PrimaryKeyViolation, "primary key conflict")
    }

    /// Unexpected failure. `cause` is kept for diagnostics only.
    pub fn internal(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, cause)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
