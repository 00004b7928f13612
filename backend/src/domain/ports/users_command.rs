//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserFields, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and insert a user.
    async fn create_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Validate and fully replace an existing user's mutable fields.
    async fn update_user(&self, id: UserId, fields: UserFields) -> Result<User, Error>;

    /// Delete a user after severing its project associations.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
