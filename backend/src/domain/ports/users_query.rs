//! Driving port for user reads.
//!
//! Inbound adapters depend on this trait rather than on persistence, so
//! handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, Project, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users, unpaginated.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user by id.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Projects visible to the user: every project for a universal user,
    /// otherwise only the associated ones.
    async fn user_projects(&self, id: UserId) -> Result<Vec<Project>, Error>;
}
