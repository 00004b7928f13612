//! Translation of Diesel and pool failures into port fault variants.
//!
//! Constraint violations are classified from PostgreSQL metadata: the
//! constraint name when the driver reports one, otherwise the `Key (col)=`
//! detail line. Anything unclassified becomes a query fault.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{ProjectPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Map pool failures to a user repository connection fault.
pub(super) fn map_user_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map pool failures to a project repository connection fault.
pub(super) fn map_project_pool_error(error: PoolError) -> ProjectPersistenceError {
    ProjectPersistenceError::connection(error.into_message())
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                column = info.column_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(%error, "diesel operation failed"),
    }
}

/// Column named in a PostgreSQL `Key (column)=(value) already exists.` detail.
fn column_from_details(info: &dyn DatabaseErrorInformation) -> Option<String> {
    let details = info.details()?;
    let start = details.find("Key (")? + "Key (".len();
    let end = details.get(start..)?.find(')')? + start;
    details.get(start..end).map(str::to_owned)
}

/// Column guarded by a unique constraint named `<table>_<column>_key`.
fn column_from_constraint(constraint: &str, table: Option<&str>) -> Option<String> {
    let stem = constraint.strip_suffix("_key")?;
    let column = table
        .and_then(|table| stem.strip_prefix(table))
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(stem);
    Some(column.to_owned())
}

fn map_unique_violation(info: &dyn DatabaseErrorInformation) -> UserPersistenceError {
    if info
        .constraint_name()
        .is_some_and(|name| name.ends_with("_pkey"))
    {
        return UserPersistenceError::primary_key_violation();
    }
    let field = info
        .constraint_name()
        .and_then(|name| column_from_constraint(name, info.table_name()))
        .or_else(|| column_from_details(info));
    match field {
        Some(field) if field == "id" => UserPersistenceError::primary_key_violation(),
        Some(field) => UserPersistenceError::unique_violation(field),
        None => UserPersistenceError::unique_violation(""),
    }
}

/// Map Diesel errors raised by user queries and mutations.
pub(super) fn map_user_diesel_error(error: DieselError) -> UserPersistenceError {
    log_diesel_error(&error);

    match error {
        DieselError::NotFound => UserPersistenceError::not_found(),
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::UniqueViolation => map_unique_violation(info.as_ref()),
            DatabaseErrorKind::NotNullViolation => {
                UserPersistenceError::not_null_violation(info.column_name().unwrap_or_default())
            }
            DatabaseErrorKind::ClosedConnection => {
                UserPersistenceError::connection("database connection error")
            }
            _ => UserPersistenceError::query(info.message()),
        },
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        other => UserPersistenceError::query(other.to_string()),
    }
}

/// Map Diesel errors raised by project reads.
pub(super) fn map_project_diesel_error(error: DieselError) -> ProjectPersistenceError {
    log_diesel_error(&error);

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProjectPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => ProjectPersistenceError::query(info.message()),
        other => ProjectPersistenceError::query(other.to_string()),
    }
}
