//! Connection settings, sourced from the environment.
//!
//! Two views of the same settings exist: the *server* endpoint (no target
//! database — what the waiter probes and the provisioner issues DDL
//! through) and the *database* endpoint (the provisioned database the
//! schema and repositories run against).

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidVar {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Connection settings for the Postgres server and the target database.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Name of the database `init-db` provisions and the repositories use.
    pub database: String,
}

impl ConnectConfig {
    /// Read settings from `STAFFDB_*` environment variables.
    ///
    /// `STAFFDB_DATABASE` is required; host, port, user, and password fall
    /// back to `localhost` / `5432` / `postgres` / empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("STAFFDB_PORT") {
            Ok(raw) => raw.parse().map_err(|source| ConfigError::InvalidVar {
                var: "STAFFDB_PORT",
                value: raw,
                source,
            })?,
            Err(_) => 5432,
        };

        Ok(Self {
            host: env_or("STAFFDB_HOST", "localhost"),
            port,
            user: env_or("STAFFDB_USER", "postgres"),
            password: std::env::var("STAFFDB_PASSWORD").unwrap_or_default(),
            database: std::env::var("STAFFDB_DATABASE")
                .map_err(|_| ConfigError::MissingVar("STAFFDB_DATABASE"))?,
        })
    }

    /// Options for the server endpoint, used before the target database is
    /// known to exist.  The session lands in the user-named default
    /// database, which is what a connection string without a database name
    /// resolves to on the server side.
    pub fn server_options(&self) -> PgConnectOptions {
        self.base_options().database(&self.user)
    }

    /// Options for the provisioned target database.
    pub fn database_options(&self) -> PgConnectOptions {
        self.base_options().database(&self.database)
    }

    fn base_options(&self) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
