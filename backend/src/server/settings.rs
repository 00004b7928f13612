//! Runtime settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `ADMIN_*` environment variables over an
//! optional configuration file.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

/// Settings controlling the listener and the persistence gateway.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADMIN")]
pub struct AdminSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string. The in-memory gateway is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Apply embedded migrations before serving traffic.
    pub run_migrations: Option<bool>,
}

impl AdminSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether to migrate at startup; off unless explicitly enabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "ADMIN_BIND_ADDR",
        "ADMIN_DATABASE_URL",
        "ADMIN_POOL_MAX_SIZE",
        "ADMIN_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AdminSettings {
        AdminSettings::load_from_iter([OsString::from("admin-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), default_bind_addr());
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size, 10);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ADMIN_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ADMIN_DATABASE_URL",
                Some("postgres://admin@localhost/admin".to_owned()),
            ),
            ("ADMIN_POOL_MAX_SIZE", Some("4".to_owned())),
            ("ADMIN_RUN_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://admin@localhost/admin")
        );
        assert_eq!(settings.pool_max_size, 4);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn run_migrations_can_be_disabled_explicitly() {
        let _guard = lock_env(
            VARS.map(|name| (name, (name == "ADMIN_RUN_MIGRATIONS").then(|| "false".to_owned()))),
        );

        let settings = load_from_empty_args();
        assert_eq!(settings.run_migrations, Some(false));
        assert!(!settings.run_migrations());
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(Some(""))]
    #[case(None)]
    fn blank_database_url_selects_in_memory_gateway(#[case] raw: Option<&str>) {
        let settings = AdminSettings {
            bind_addr: None,
            database_url: raw.map(str::to_owned),
            pool_max_size: 10,
            run_migrations: None,
        };
        assert_eq!(settings.database_url(), None);
    }
}
