//! Application state - shared across all handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, timeout_at};

use forum_core::error::RepoError;
use forum_core::ports::{CommentRepository, PostRepository, ReplyRepository, UserRepository};
use forum_infra::database::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
use forum_infra::database::{
    DatabaseConnections, PostgresCommentRepository, PostgresPostRepository,
    PostgresReplyRepository, PostgresUserRepository,
};

use crate::config::AppConfig;
use crate::middleware::error::{AppError, AppResult};

/// Shared application state: one repository per resource plus the pool that backs them.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
    pub users: Arc<dyn UserRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<DatabaseConnections>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// A configured database that cannot be reached is a startup failure.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running on the in-memory store.");
            return Ok(Self::in_memory(config.request_timeout));
        };

        Self::from_database(db_config, config.request_timeout).await
    }

    #[cfg(feature = "postgres")]
    async fn from_database(
        db_config: &DatabaseConfig,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let connections = DatabaseConnections::init(db_config)
            .await
            .map_err(|e| anyhow::anyhow!("Unable to connect to database: {e}"))?;
        tracing::info!("Application state initialized (postgres)");
        Ok(Self::postgres(connections, request_timeout))
    }

    #[cfg(not(feature = "postgres"))]
    async fn from_database(
        db_config: &DatabaseConfig,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        tracing::warn!(
            url = %db_config.url,
            "Built without the postgres feature - ignoring DATABASE_URL"
        );
        Ok(Self::in_memory(request_timeout))
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(request_timeout: Duration) -> Self {
        let store = Arc::new(InMemoryStore::new());
        tracing::info!("Application state initialized (in-memory)");

        Self {
            posts: store.clone(),
            comments: store.clone(),
            replies: store.clone(),
            users: store,
            #[cfg(feature = "postgres")]
            db: None,
            request_timeout,
        }
    }

    /// State backed by PostgreSQL; every repository borrows from the same pool.
    #[cfg(feature = "postgres")]
    pub fn postgres(connections: DatabaseConnections, request_timeout: Duration) -> Self {
        let conn = &connections.main;

        Self {
            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
            comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
            replies: Arc::new(PostgresReplyRepository::new(conn.clone())),
            users: Arc::new(PostgresUserRepository::new(conn.clone())),
            db: Some(connections),
            request_timeout,
        }
    }

    /// Start the deadline for one request.
    pub fn deadline(&self) -> Deadline {
        Deadline {
            at: Instant::now() + self.request_timeout,
            budget: self.request_timeout,
        }
    }

    /// Release the connection pool. Called once after the server stops.
    #[cfg(feature = "postgres")]
    pub async fn shutdown(self) {
        let Self {
            posts,
            comments,
            replies,
            users,
            db,
            ..
        } = self;
        // Repositories hold pool handles of their own.
        drop((posts, comments, replies, users));

        if let Some(db) = db {
            if let Err(e) = db.close().await {
                tracing::error!("Unable to close database: {}", e);
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn shutdown(self) {}
}

/// Point in time by which all store calls of a request must finish.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Run a store call; dropping it on expiry returns its connection to the pool.
    pub async fn run<T, F>(&self, operation: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, RepoError>>,
    {
        match timeout_at(self.at, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::Internal(format!(
                "Request exceeded its {}ms store deadline",
                self.budget.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_passes_results_through() {
        let state = AppState::in_memory(Duration::from_secs(5));
        let value = state
            .deadline()
            .run(async { Ok::<_, RepoError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);

        let err = state
            .deadline()
            .run(async { Err::<(), _>(RepoError::Query("boom".to_string())) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_deadline_expires() {
        let state = AppState::in_memory(Duration::from_millis(10));
        let err = state
            .deadline()
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, RepoError>(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("deadline"));
    }
}
