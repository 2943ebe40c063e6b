//! Postgres connectivity check used by the smoke menu.
//!
//! Connection parameters come from `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//! `POSTGRES_DB`, `DB_HOST` and `DB_PORT`. The web UI never touches this.

use std::fmt;

use postgres::NoTls;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("DB_PORT is not a valid port: '{0}'")]
    InvalidPort(String),
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] postgres::Error),
    #[error("failed to run query: {0}")]
    Query(#[source] postgres::Error),
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, DatabaseError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DatabaseError> {
        let var = |key: &'static str| lookup(key).ok_or(DatabaseError::MissingVar(key));
        let port = var("DB_PORT")?;
        Ok(Self {
            user: var("POSTGRES_USER")?,
            password: var("POSTGRES_PASSWORD")?,
            name: var("POSTGRES_DB")?,
            host: var("DB_HOST")?,
            port: port.trim().parse().map_err(|_| DatabaseError::InvalidPort(port.clone()))?,
        })
    }

    pub fn to_postgres(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.name)
            .host(&self.host)
            .port(self.port);
        config
    }

    fn connect(&self) -> Result<postgres::Client, DatabaseError> {
        self.to_postgres().connect(NoTls).map_err(DatabaseError::Connect)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Something that can report the database server's clock.
pub trait DatabaseProbe {
    fn server_time(&self) -> Result<String, DatabaseError>;
}

/// Reads `DatabaseConfig` from the environment on every check and runs
/// `SELECT NOW()`.
#[derive(Debug, Default)]
pub struct PostgresProbe;

impl DatabaseProbe for PostgresProbe {
    fn server_time(&self) -> Result<String, DatabaseError> {
        let config = DatabaseConfig::from_env()?;
        tracing::debug!(host = %config.host, port = config.port, db = %config.name, "connecting to database");
        let mut client = config.connect()?;
        let row = client
            .query_one("SELECT NOW()::text", &[])
            .map_err(DatabaseError::Query)?;
        Ok(row.get(0))
    }
}
