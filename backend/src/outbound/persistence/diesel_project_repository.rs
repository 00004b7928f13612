//! PostgreSQL-backed `ProjectRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Project;
use crate::domain::ports::{ProjectPersistenceError, ProjectRepository};

use super::diesel_error_mapping::{map_project_diesel_error, map_project_pool_error};
use super::models::ProjectRow;
use super::pool::DbPool;
use super::schema::projects;

#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ProjectPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_project_pool_error)?;

        let rows: Vec<ProjectRow> = projects::table
            .select(ProjectRow::as_select())
            .order(projects::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_project_diesel_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }
}
