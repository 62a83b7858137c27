//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::PostService;
use posts_core::ports::PostRepository;
use posts_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mysql")]
use anyhow::Context;
#[cfg(feature = "mysql")]
use posts_infra::database::{DatabasePool, MySqlPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    #[cfg(feature = "mysql")]
    pub db: Option<DatabasePool>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "mysql")]
        if let Some(config) = db_config {
            let pool = DatabasePool::connect(config)
                .await
                .context("failed to connect to MySQL")?;
            let repo = Arc::new(MySqlPostRepository::new(pool.connection()));

            tracing::info!("Application state initialized");

            return Ok(Self {
                posts: PostService::new(repo),
                db: Some(pool),
            });
        }

        match db_config {
            Some(_) => tracing::warn!(
                "Database configured but the `mysql` feature is disabled. Using in-memory repository."
            ),
            None => tracing::warn!(
                "DB_HOST/DB_NAME or DATABASE_URL not set. Running without database (in-memory mode)."
            ),
        }

        Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())))
    }

    /// State backed by an arbitrary repository and no pool.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
            #[cfg(feature = "mysql")]
            db: None,
        }
    }
}
