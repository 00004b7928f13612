//! In-memory project catalogue.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ProjectPersistenceError, ProjectRepository};
use crate::domain::{Project, ProjectId};

#[derive(Default)]
struct ProjectStore {
    projects: BTreeMap<ProjectId, Project>,
    last_id: i32,
}

/// Project catalogue held in a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    store: Mutex<ProjectStore>,
}

fn poisoned() -> ProjectPersistenceError {
    ProjectPersistenceError::query("project store lock poisoned")
}

impl InMemoryProjectRepository {
    /// Register a project under the next sequential id.
    ///
    /// # Errors
    /// Fails only if a previous holder of the store lock panicked.
    pub fn add(&self, name: impl Into<String>) -> Result<Project, ProjectPersistenceError> {
        let mut store = self.store.lock().map_err(|_| poisoned())?;
        store.last_id += 1;
        let project = Project::new(ProjectId::new(store.last_id), name);
        store.projects.insert(project.id, project.clone());
        Ok(project)
    }

    pub(crate) fn contains(&self, id: ProjectId) -> Result<bool, ProjectPersistenceError> {
        let store = self.store.lock().map_err(|_| poisoned())?;
        Ok(store.projects.contains_key(&id))
    }

    /// Resolve ids to projects, silently skipping unknown ids.
    pub(crate) fn resolve(
        &self,
        ids: impl IntoIterator<Item = ProjectId>,
    ) -> Result<Vec<Project>, ProjectPersistenceError> {
        let store = self.store.lock().map_err(|_| poisoned())?;
        Ok(ids
            .into_iter()
            .filter_map(|id| store.projects.get(&id).cloned())
            .collect())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ProjectPersistenceError> {
        let store = self.store.lock().map_err(|_| poisoned())?;
        Ok(store.projects.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_and_listing_is_ordered() {
        let repo = InMemoryProjectRepository::default();
        let core = repo.add("core").expect("add core");
        let edge = repo.add("edge").expect("add edge");

        assert_eq!(core.id, ProjectId::new(1));
        assert_eq!(edge.id, ProjectId::new(2));
        assert_eq!(repo.list().await.expect("list"), vec![core, edge]);
    }

    #[tokio::test]
    async fn resolve_skips_unknown_ids() {
        let repo = InMemoryProjectRepository::default();
        let core = repo.add("core").expect("add core");

        let resolved = repo
            .resolve([ProjectId::new(9), core.id])
            .expect("resolve");
        assert_eq!(resolved, vec![core]);
    }
}
