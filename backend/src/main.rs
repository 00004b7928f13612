//! Backend entry-point: loads settings, wires persistence, and serves the
//! user administration API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use admin_backend::inbound::http::health::HealthState;
use admin_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use admin_backend::server::{AdminSettings, ServerConfig, create_server};

async fn server_config(settings: &AdminSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        run_pending_migrations(database_url.to_owned())
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size))
        .await
        .map_err(|err| std::io::Error::other(err.into_message()))?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AdminSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let config = server_config(&settings).await?;
    info!(
        bind_addr = %config.bind_addr(),
        database = config.uses_database(),
        "starting admin backend"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
