//! Server configuration
//!
//! Defaults layered under the process environment (after `.env`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use config::{Config, Environment};
use paddlex_core::logging_facility::Profile;
use paddlex_core_types::Sensitive;
use paddlex_store::PaddleStore;
use serde::Deserialize;

/// `DB_NAME` value that selects a throwaway in-memory database
pub const IN_MEMORY_DB_NAME: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Deadline for each storage call
    pub db_timeout: Duration,
    pub log_format: Profile,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
    pub name: String,
}

#[derive(Deserialize)]
struct RawSettings {
    host: String,
    port: u16,
    db_host: String,
    db_port: u16,
    db_user: String,
    db_password: String,
    db_name: String,
    db_timeout_ms: u64,
    log_format: String,
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    /// Build from an explicit environment source
    pub fn from_environment(env: Environment) -> anyhow::Result<Self> {
        let raw: RawSettings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_user", "postgres")?
            .set_default("db_password", "postgres")?
            .set_default("db_name", "pickleball_db")?
            .set_default("db_timeout_ms", 5000_i64)?
            .set_default("log_format", "development")?
            .add_source(env.try_parsing(true))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        let log_format = raw.log_format.parse::<Profile>().map_err(|e| anyhow!(e))?;

        Ok(Self {
            host: raw.host,
            port: raw.port,
            db_timeout: Duration::from_millis(raw.db_timeout_ms),
            log_format,
            database: DatabaseConfig {
                host: raw.db_host,
                port: raw.db_port,
                user: raw.db_user,
                password: Sensitive::new(raw.db_password),
                name: raw.db_name,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Report the effective configuration; the password stays redacted
    pub fn log_startup(&self) {
        tracing::info!(
            bind = %self.bind_address(),
            db_timeout_ms = self.db_timeout.as_millis() as u64,
            db_host = %self.database.host,
            db_port = self.database.port,
            db_user = %self.database.user,
            db_password = %self.database.password,
            db_name = %self.database.name,
            "configuration loaded"
        );
    }
}

impl DatabaseConfig {
    /// SQLite file backing `name`; `None` for the in-memory database
    pub fn sqlite_path(&self) -> Option<PathBuf> {
        if self.name == IN_MEMORY_DB_NAME {
            None
        } else {
            Some(PathBuf::from(format!("{}.sqlite3", self.name)))
        }
    }

    pub fn open_store(&self) -> paddlex_store::Result<PaddleStore> {
        match self.sqlite_path() {
            Some(path) => PaddleStore::open(path),
            None => PaddleStore::open_in_memory(),
        }
    }
}
