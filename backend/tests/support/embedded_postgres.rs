//! Embedded PostgreSQL provisioning and raw seeding for repository suites.
//!
//! Every test gets its own temporary database on the shared cluster, migrated
//! with the backend's embedded migrations. Seeding goes through a synchronous
//! Diesel connection because the ports expose no association writes.

use diesel::sql_types::{Integer, Text};
use diesel::{Connection, PgConnection, RunQueryDsl, sql_query};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;

/// Creates an empty temporary database on the shared embedded cluster.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let name = format!("test_{}", uuid::Uuid::new_v4().simple());
    cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))
}

fn connect(url: &str) -> Result<PgConnection, String> {
    PgConnection::establish(url).map_err(|err| format!("connect: {err}"))
}

/// Inserts one project per name; ids follow insertion order from 1.
pub fn seed_projects(url: &str, names: &[&str]) -> Result<(), String> {
    let mut conn = connect(url)?;
    for name in names {
        sql_query("INSERT INTO projects (name) VALUES ($1)")
            .bind::<Text, _>(*name)
            .execute(&mut conn)
            .map_err(|err| format!("seed project {name}: {err}"))?;
    }
    Ok(())
}

/// Associates `user_id` with `project_id`.
pub fn link_user_to_project(url: &str, user_id: i32, project_id: i32) -> Result<(), String> {
    let mut conn = connect(url)?;
    sql_query("INSERT INTO user_projects (user_id, project_id) VALUES ($1, $2)")
        .bind::<Integer, _>(user_id)
        .bind::<Integer, _>(project_id)
        .execute(&mut conn)
        .map_err(|err| format!("link user {user_id} to project {project_id}: {err}"))?;
    Ok(())
}

/// Rewinds the users id sequence so the next insert reuses id 1.
pub fn rewind_user_ids(url: &str) -> Result<(), String> {
    let mut conn = connect(url)?;
    sql_query("SELECT setval('users_id_seq', 1, false)")
        .execute(&mut conn)
        .map_err(|err| format!("rewind users_id_seq: {err}"))?;
    Ok(())
}
