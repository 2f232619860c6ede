#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the relational store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

/// Process-wide connection pool.
///
/// Created once at startup and shared with every repository through an `Arc`.
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the pool. A failure here is not retried.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self {
            main: Arc::new(main),
        })
    }

    /// Close the pool once this is the last handle to it.
    ///
    /// Repositories hold their own handles; drop them first.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.main) {
            Ok(conn) => {
                tracing::info!("Closing database connection pool");
                conn.close().await
            }
            Err(shared) => {
                tracing::warn!(
                    handles = Arc::strong_count(&shared),
                    "Connection pool still in use, leaving it to close on drop"
                );
                Ok(())
            }
        }
    }
}
