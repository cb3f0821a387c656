//! Application state

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db::{EmployeeStore, PgEmployeeStore};
use crate::service::HierarchyService;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: HierarchyService,
}

impl AppState {
    /// Connect the pool, run migrations, and wire the service
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::with_store(Arc::new(PgEmployeeStore::new(pool))))
    }

    /// Build state over any store implementation (tests run against an
    /// in-memory store)
    pub fn with_store(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            service: HierarchyService::new(store),
        }
    }
}
