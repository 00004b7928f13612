//! Driven port for reading projects.

use async_trait::async_trait;

use crate::domain::Project;

use super::define_port_error;

define_port_error! {
    /// Faults raised by project repository adapters.
    pub enum ProjectPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "project repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "project repository query failed: {message}",
    }
}

/// Read-only access to the project catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Every stored project.
    async fn list(&self) -> Result<Vec<Project>, ProjectPersistenceError>;
}
