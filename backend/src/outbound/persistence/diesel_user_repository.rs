//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Project, User, UserDraft, UserId};

use super::diesel_error_mapping::{map_user_diesel_error, map_user_pool_error};
use super::models::{NewUserRow, ProjectRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::{projects, user_projects, users};

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row).map_err(UserPersistenceError::query)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_user_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row: UserRow = users::table
            .find(id.as_i32())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_user_diesel_error)?;

        row_to_user(row)
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from(draft))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_user_diesel_error)?;

        row_to_user(row)
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row: UserRow = diesel::update(users::table.find(user.id().as_i32()))
            .set(UserChangeset::from(user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_user_diesel_error)?;

        row_to_user(row)
    }

    async fn find_projects(&self, id: UserId) -> Result<Vec<Project>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let rows: Vec<ProjectRow> = user_projects::table
            .inner_join(projects::table)
            .filter(user_projects::user_id.eq(id.as_i32()))
            .select(ProjectRow::as_select())
            .order(projects::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_user_diesel_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn delete_with_projects(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;
        let user_id = id.as_i32();

        // Returning NotFound from the closure rolls the association delete back.
        let unlinked = conn
            .transaction(|conn| {
                async move {
                    let unlinked = diesel::delete(
                        user_projects::table.filter(user_projects::user_id.eq(user_id)),
                    )
                    .execute(conn)
                    .await?;

                    let deleted = diesel::delete(users::table.find(user_id))
                        .execute(conn)
                        .await?;
                    if deleted == 0 {
                        return Err(diesel::result::Error::NotFound);
                    }
                    Ok::<usize, diesel::result::Error>(unlinked)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_user_diesel_error)?;

        debug!(user_id, unlinked, "deleted user and project associations");
        Ok(())
    }
}
