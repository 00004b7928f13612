//! Driven port for user persistence.
//!
//! Adapters report failures as a closed set of [`UserPersistenceError`]
//! variants so the domain never inspects driver-specific error values.

use async_trait::async_trait;

use crate::domain::{Project, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Faults raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No user row matched the identifier.
        NotFound => "user record not found",
        /// A required column was empty. `column` is empty when unknown.
        NotNullViolation { column: String } => "not-null constraint violated: {column}",
        /// A unique column already holds the value.
        UniqueViolation { field: String } => "unique constraint violated: {field}",
        /// The primary key already exists.
        PrimaryKeyViolation => "primary key constraint violated",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Persistence gateway for users and their project associations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, unfiltered.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch one user; [`UserPersistenceError::NotFound`] when absent.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError>;

    /// Insert a new user and return it with its assigned id.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite every mutable column of an existing user.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Projects explicitly associated with the user.
    async fn find_projects(&self, id: UserId) -> Result<Vec<Project>, UserPersistenceError>;

    /// Remove the user's project associations and then the user row as one
    /// atomic unit. On [`UserPersistenceError::NotFound`] nothing is changed.
    async fn delete_with_projects(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
