//! In-memory user store with project associations.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ProjectPersistenceError, UserPersistenceError, UserRepository};
use crate::domain::{Project, ProjectId, User, UserDraft, UserId};

use super::InMemoryProjectRepository;

#[derive(Default)]
struct UserStore {
    users: BTreeMap<UserId, User>,
    links: BTreeSet<(UserId, ProjectId)>,
    last_id: i32,
}

impl UserStore {
    fn name_taken(&self, name: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| user.name().as_str() == name && Some(user.id()) != except)
    }
}

/// User repository backed by process memory.
///
/// Project associations reference the shared [`InMemoryProjectRepository`],
/// so universal and per-user visibility resolve against the same catalogue.
pub struct InMemoryUserRepository {
    store: Mutex<UserStore>,
    projects: Arc<InMemoryProjectRepository>,
}

fn project_fault(err: ProjectPersistenceError) -> UserPersistenceError {
    match err {
        ProjectPersistenceError::Connection { message } => {
            UserPersistenceError::connection(message)
        }
        ProjectPersistenceError::Query { message } => UserPersistenceError::query(message),
    }
}

impl InMemoryUserRepository {
    pub fn new(projects: Arc<InMemoryProjectRepository>) -> Self {
        Self {
            store: Mutex::new(UserStore::default()),
            projects,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserStore>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }

    /// Grant `user` explicit visibility into `project`.
    ///
    /// # Errors
    /// [`UserPersistenceError::NotFound`] for an unknown user and a query
    /// fault for an unknown project, matching the foreign keys of the
    /// relational schema.
    pub fn associate(&self, user: UserId, project: ProjectId) -> Result<(), UserPersistenceError> {
        if !self.projects.contains(project).map_err(project_fault)? {
            return Err(UserPersistenceError::query(format!(
                "project {project} does not exist"
            )));
        }
        let mut store = self.lock()?;
        if !store.users.contains_key(&user) {
            return Err(UserPersistenceError::not_found());
        }
        store.links.insert((user, project));
        Ok(())
    }

    /// Number of association rows referencing `user`.
    ///
    /// # Errors
    /// Fails only if the store lock is poisoned.
    pub fn association_count(&self, user: UserId) -> Result<usize, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.links.iter().filter(|(owner, _)| *owner == user).count())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let store = self.lock()?;
        store
            .users
            .get(&id)
            .cloned()
            .ok_or_else(UserPersistenceError::not_found)
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        if store.name_taken(draft.name.as_str(), None) {
            return Err(UserPersistenceError::unique_violation("name"));
        }
        store.last_id += 1;
        let user = User::new(UserId::new(store.last_id), draft.clone());
        store.users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        if !store.users.contains_key(&user.id()) {
            return Err(UserPersistenceError::not_found());
        }
        if store.name_taken(user.name().as_str(), Some(user.id())) {
            return Err(UserPersistenceError::unique_violation("name"));
        }
        store.users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn find_projects(&self, id: UserId) -> Result<Vec<Project>, UserPersistenceError> {
        let linked: Vec<ProjectId> = {
            let store = self.lock()?;
            store
                .links
                .iter()
                .filter(|(owner, _)| *owner == id)
                .map(|(_, project)| *project)
                .collect()
        };
        self.projects.resolve(linked).map_err(project_fault)
    }

    async fn delete_with_projects(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut store = self.lock()?;
        if store.users.remove(&id).is_none() {
            return Err(UserPersistenceError::not_found());
        }
        let before = store.links.len();
        store.links.retain(|(owner, _)| *owner != id);
        debug!(user_id = %id, unlinked = before - store.links.len(), "deleted in-memory user");
        Ok(())
    }
}
