//! Database module: owner storage and connection setup.
//!
//! Layout:
//! - `models.rs`: the `Owner` row/payload struct
//! - `schema.rs`: DDL and bundled seed scripts per dialect
//! - `owners.rs`: the owner repository

pub mod models;
pub mod owners;
pub mod schema;

pub use models::Owner;
pub use owners::OwnerRepository;

use crate::error::ConfigError;
use sqlx::AnyPool;
use sqlx::any::{Any, AnyPoolOptions, install_default_drivers};
use sqlx::migrate::MigrateDatabase;
use tracing::info;

/// SQL flavour of the connected database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    MySql,
    Sqlite,
}

impl SqlDialect {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or_default();
        match scheme.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(SqlDialect::MySql),
            "sqlite" => Ok(SqlDialect::Sqlite),
            other => Err(ConfigError::UnsupportedDatabase(other.to_string())),
        }
    }
}

/// Connection pool plus the dialect it speaks.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
    dialect: SqlDialect,
}

impl Database {
    /// Open a pool for `url`, creating the database first when asked and missing.
    pub async fn connect(url: &str, create_if_absent: bool) -> Result<Self, ConfigError> {
        install_default_drivers();
        let dialect = SqlDialect::from_url(url)?;

        if create_if_absent && !Any::database_exists(url).await? {
            info!(?dialect, "database missing; creating it");
            Any::create_database(url).await?;
        }

        let pool = AnyPoolOptions::new().max_connections(10).connect(url).await?;
        Ok(Self { pool, dialect })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Create the owners table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        self.execute_script(self.dialect.init_script()).await
    }

    /// Drop, recreate and repopulate the owners table from the bundled seed.
    pub async fn run_seed(&self) -> Result<(), sqlx::Error> {
        self.execute_script(self.dialect.seed_script()).await
    }

    async fn execute_script(&self, script: &str) -> Result<(), sqlx::Error> {
        for stmt in schema::statements(script) {
            sqlx::raw_sql(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }
}
