//! In-process gateway used when no database is configured and in tests.
//!
//! Mirrors the PostgreSQL adapter's observable behaviour: sequential ids,
//! a unique `name`, and all-or-nothing deletes.

mod project_repository;
mod user_repository;

pub use project_repository::InMemoryProjectRepository;
pub use user_repository::InMemoryUserRepository;
