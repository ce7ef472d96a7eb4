//! SeaORM persistence: connection setup, entities, migrations and
//! repository implementations

pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./truckers.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::sqlite("./truckers.db")
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
        }
    }

    /// Private in-memory database; lives as long as the connection pool.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if config.is_memory() {
        // Every pooled connection would otherwise open its own empty database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
