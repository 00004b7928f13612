//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror their wire shape and exist only for documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Unparsable path identifier or request body.
    #[schema(rename = "bad_request")]
    BadRequest,
    /// A field validation rule rejected the input.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A required column was empty.
    #[schema(rename = "not_null_violation")]
    NotNullViolation,
    /// A unique value already exists.
    #[schema(rename = "unique_violation")]
    UniqueViolation,
    /// The primary key already exists.
    #[schema(rename = "primary_key_violation")]
    PrimaryKeyViolation,
    /// Unexpected server-side failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// Human-readable message. Generic for internal errors.
    #[schema(example = "user name must not be empty")]
    message: String,
    /// Correlation identifier, also sent as the `Trace-Id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "hit9")]
    name: String,
    #[schema(example = "hit9@example.com")]
    email: String,
    enable_email: bool,
    #[schema(example = "+8618701234567")]
    phone: String,
    enable_phone: bool,
    /// Universal users see every project.
    universal: bool,
    /// 0 (low), 1 (medium) or 2 (high).
    #[schema(minimum = 0, maximum = 2)]
    rule_level: i32,
}

/// OpenAPI schema for [`crate::domain::Project`].
#[derive(ToSchema)]
#[schema(as = Project)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProjectSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "core")]
    name: String,
}
