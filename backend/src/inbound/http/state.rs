//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from the user administration ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use admin_backend::domain::UserAdminService;
    /// use admin_backend::inbound::http::state::HttpState;
    /// use admin_backend::outbound::memory::{InMemoryProjectRepository, InMemoryUserRepository};
    ///
    /// let projects = Arc::new(InMemoryProjectRepository::default());
    /// let users = Arc::new(InMemoryUserRepository::new(projects.clone()));
    /// let service = Arc::new(UserAdminService::new(users, projects));
    /// let state = HttpState::new(service.clone(), service);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }
}
