//! Domain primitives, ports, and services for user administration.
//!
//! Public surface:
//! - Error, ErrorCode, ResourceKind: the closed error taxonomy.
//! - User, UserFields, UserDraft: raw, validated, and persisted user shapes.
//! - Project: a project reference visible to users.
//! - UserAdminService: implements the driving ports over the driven ports.

pub mod error;
pub mod ports;
pub mod project;
pub mod trace_id;
pub mod user;
pub mod user_admin_service;

pub use self::error::{Error, ErrorCode, ResourceKind};
pub use self::project::{Project, ProjectId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, Phone, RuleLevel, User, UserDraft, UserFields, UserId, UserName, UserValidationError,
};
pub use self::user_admin_service::UserAdminService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use admin_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::bad_request("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
