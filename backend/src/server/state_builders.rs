//! Wiring from configuration to the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::UserAdminService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryProjectRepository, InMemoryUserRepository};
use crate::outbound::persistence::{DbPool, DieselProjectRepository, DieselUserRepository};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    let service = Arc::new(UserAdminService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselProjectRepository::new(pool.clone())),
    ));
    HttpState::new(service.clone(), service)
}

/// Build handler state over the in-memory gateway.
pub fn in_memory_state(
    users: Arc<InMemoryUserRepository>,
    projects: Arc<InMemoryProjectRepository>,
) -> HttpState {
    let service = Arc::new(UserAdminService::new(users, projects));
    HttpState::new(service.clone(), service)
}

/// Build handler state using PostgreSQL when a pool is configured, otherwise
/// an empty in-memory gateway.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL persistence");
            diesel_state(pool)
        }
        None => {
            info!("no database configured; using in-memory persistence");
            let projects = Arc::new(InMemoryProjectRepository::default());
            let users = Arc::new(InMemoryUserRepository::new(projects.clone()));
            in_memory_state(users, projects)
        }
    };
    web::Data::new(state)
}
