//! User administration service.
//!
//! Implements [`UsersQuery`] and [`UsersCommand`] over the user and project
//! repositories. Validation always runs before any repository call, and every
//! repository fault is folded into exactly one domain [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ProjectPersistenceError, ProjectRepository, UserPersistenceError, UserRepository,
    UsersCommand, UsersQuery,
};
use crate::domain::{Error, Project, ResourceKind, User, UserFields, UserId};

/// Service backing the user administration endpoints.
#[derive(Clone)]
pub struct UserAdminService<U, P> {
    users: Arc<U>,
    projects: Arc<P>,
}

impl<U, P> UserAdminService<U, P> {
    pub fn new(users: Arc<U>, projects: Arc<P>) -> Self {
        Self { users, projects }
    }
}

fn map_user_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::NotFound => Error::not_found(ResourceKind::User),
        UserPersistenceError::NotNullViolation { column } => {
            Error::not_null_violation(Some(column.as_str()).filter(|c| !c.is_empty()))
        }
        UserPersistenceError::UniqueViolation { field } => Error::unique_violation(&field),
        UserPersistenceError::PrimaryKeyViolation => Error::primary_key_violation(),
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unavailable");
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_project_error(err: ProjectPersistenceError) -> Error {
    match err {
        ProjectPersistenceError::Connection { message } => {
            error!(%message, "project repository unavailable");
            Error::internal(format!("project repository unavailable: {message}"))
        }
        ProjectPersistenceError::Query { message } => {
            error!(%message, "project repository query failed");
            Error::internal(format!("project repository error: {message}"))
        }
    }
}

#[async_trait]
impl<U, P> UsersQuery for UserAdminService<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users.find_by_id(id).await.map_err(map_user_error)
    }

    async fn user_projects(&self, id: UserId) -> Result<Vec<Project>, Error> {
        let user = self.users.find_by_id(id).await.map_err(map_user_error)?;
        if user.universal() {
            self.projects.list().await.map_err(map_project_error)
        } else {
            self.users.find_projects(id).await.map_err(map_user_error)
        }
    }
}

#[async_trait]
impl<U, P> UsersCommand for UserAdminService<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    async fn create_user(&self, fields: UserFields) -> Result<User, Error> {
        let draft = fields.validate()?;
        let user = self.users.create(&draft).await.map_err(map_user_error)?;
        info!(user_id = %user.id(), name = %user.name(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, fields: UserFields) -> Result<User, Error> {
        let draft = fields.validate()?;
        let mut user = self.users.find_by_id(id).await.map_err(map_user_error)?;
        user.replace_fields(draft);
        let saved = self.users.save(&user).await.map_err(map_user_error)?;
        info!(user_id = %saved.id(), "user updated");
        Ok(saved)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.users
            .delete_with_projects(id)
            .await
            .map_err(map_user_error)?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_admin_service_tests.rs"]
mod tests;
